use crate::commands::{cat::CatArgs, train::TrainArgs};

pub mod cat;
pub mod train;

/// Subcommands for wordmerge
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a token table from text files.
    Train(TrainArgs),

    /// Act as a streaming tokenizer.
    Cat(CatArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
        }
    }
}
