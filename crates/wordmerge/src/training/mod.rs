//! # Vocabulary Training
//!
//! Support for learning a merge history, and a token table, from a corpus.
//!
//! Training is a loop over three steps:
//! * count every adjacent symbol pair ([`utility::PairStats`]),
//! * select the most frequent pair,
//! * merge that pair everywhere in the word vocabulary ([`utility::WordVocab`]).
//!
//! The loop ends when the round budget is spent, or no pairs remain.
//!
//! ## Training Example
//!
//! ```rust
//! use wordmerge::{
//!     training::{BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions},
//!     vocab::TokenTable,
//! };
//!
//! let options = BinaryPairVocabTrainerOptions::new(2);
//! let mut trainer: BinaryPairVocabTrainer<u32> = options.init();
//! trainer.update_from_samples(["aaab"]);
//!
//! let results = trainer.train().unwrap();
//! assert_eq!(results.merges.len(), 2);
//!
//! let table: TokenTable<u32> = TokenTable::from_train_results(&results).unwrap();
//! assert_eq!(table.len(), 2 + 4);
//! ```

pub mod utility;

mod bpe_trainer;
mod training_types;

#[doc(inline)]
pub use bpe_trainer::{
    BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions, DEFAULT_MAX_MERGES, MergeLoop,
    TrainResults, TrainerState,
};
#[doc(inline)]
pub use training_types::CountType;
