use std::io::BufRead;

use wordmerge::{
    training::{BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions, DEFAULT_MAX_MERGES},
    vocab::{TokenTable, io::write_token_table_json},
};

use crate::{
    input_output::{OutputArgs, open_path_reader},
    logging::LogArgs,
};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files; "-" may be used to indicate stdin.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Max merge rounds.
    #[arg(long, default_value_t = DEFAULT_MAX_MERGES)]
    max_merges: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = BinaryPairVocabTrainerOptions::new(self.max_merges);
        let mut trainer: BinaryPairVocabTrainer<u32> = options.init();

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            read_text_file(&mut trainer, path)?;
        }

        log::info!("Training...");
        let results = trainer.train()?;
        let table: TokenTable<u32> = TokenTable::from_train_results(&results)?;

        log::info!(
            "Token table: {} learned symbols, {} merges",
            table.learned_len(),
            results.merges.len()
        );

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_token_table_json(&table, &mut writer)?;

        Ok(())
    }
}

fn read_text_file(
    trainer: &mut BinaryPairVocabTrainer<u32>,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = read_text_lines(trainer, open_path_reader(path)?)?;
    log::debug!("{path}: {lines} lines");
    Ok(())
}

/// Feed each line of `reader` to the trainer as one sample.
///
/// An empty source still counts as one (empty) sample.
fn read_text_lines<R: BufRead>(
    trainer: &mut BinaryPairVocabTrainer<u32>,
    reader: R,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut lines = 0;
    for line in reader.lines() {
        trainer.update_from_text(line?);
        lines += 1;
    }
    if lines == 0 {
        trainer.update_from_text("");
    }
    Ok(lines)
}
