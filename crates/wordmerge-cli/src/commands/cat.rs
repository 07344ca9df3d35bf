use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use wordmerge::{
    decoders::{SymbolDecoder, TokenDecoder},
    encoders::{LongestPrefixEncoder, TokenEncoder},
    vocab::{TokenTable, io::load_token_table_json_path},
};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
};

/// Which way ``cat`` translates its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatDirection {
    /// Text lines to token id lines.
    Encode,

    /// Token id lines to text lines.
    Decode,
}

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    /// Token table JSON file, as written by ``train``.
    #[arg(long)]
    vocab: String,

    /// Encode text lines into space separated token ids.
    #[arg(long, conflicts_with = "decode", required_unless_present = "decode")]
    encode: bool,

    /// Decode space separated token ids into text lines.
    #[arg(long)]
    decode: bool,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// The selected direction; clap admits exactly one of the two flags.
    pub fn direction(&self) -> CatDirection {
        if self.encode {
            CatDirection::Encode
        } else {
            CatDirection::Decode
        }
    }

    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let table: Arc<TokenTable<u32>> = Arc::new(load_token_table_json_path(&self.vocab)?);
        log::info!("Loaded {}: {} tokens", self.vocab, table.len());

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.direction() {
            CatDirection::Encode => run_cat_encode(&mut reader, &mut writer, table)?,
            CatDirection::Decode => run_cat_decode(&mut reader, &mut writer, table)?,
        }

        Ok(())
    }
}

fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    table: Arc<TokenTable<u32>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = LongestPrefixEncoder::new(table);

    for line in reader.lines() {
        let tokens = encoder.encode(line?);

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    table: Arc<TokenTable<u32>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let decoder = SymbolDecoder::new(table);

    for line in reader.lines() {
        let tokens = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;

        let text = decoder.decode_to_string(&tokens)?;

        writeln!(writer, "{}", text)?;
        writer.flush()?;
    }
    Ok(())
}
