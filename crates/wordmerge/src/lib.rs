//! # `wordmerge` Subword Tokenizer
//!
//! Pair-merge subword vocabulary training, and greedy longest-prefix encoding.
//!
//! See:
//! * [`spanning`] to split text into word units.
//! * [`training`] to learn a merge history and a [`vocab::TokenTable`] from a corpus.
//! * [`vocab`] to manage token tables, reserved tokens, and token table io.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to map tokens back into symbols.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//! * ``std``
//!
//! #### feature: ``std``
//!
//! Enables the std features of the core dependencies; currently required.
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::WMHash{*}`` type alias machinery.
//! No output of this crate depends on hash iteration order.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Example
//!
//! ```rust
//! use wordmerge::{
//!     encoders::{LongestPrefixEncoder, TokenEncoder},
//!     training::BinaryPairVocabTrainerOptions,
//!     vocab::TokenTable,
//! };
//!
//! let mut trainer = BinaryPairVocabTrainerOptions::new(500).init::<u32>();
//! trainer.update_from_samples(["low lower lowest", "newer newest"]);
//!
//! let results = trainer.train().unwrap();
//! let table: TokenTable<u32> = TokenTable::from_train_results(&results).unwrap();
//!
//! let encoder = LongestPrefixEncoder::new(table.into());
//! let tokens = encoder.encode("lowest");
//! assert!(!tokens.is_empty());
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod spanning;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WMResult, WordmergeError};
