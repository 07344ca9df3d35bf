//! # Token Encoders
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordmerge::encoders::{LongestPrefixEncoder, TokenEncoder};
//! use wordmerge::types::TokenType;
//! use wordmerge::vocab::TokenTable;
//!
//! fn example<T: TokenType>(
//!     table: Arc<TokenTable<T>>,
//!     batch: &[String],
//! ) -> Vec<Vec<T>> {
//!     let encoder = LongestPrefixEncoder::new(table);
//!
//!     #[cfg(feature = "rayon")]
//!     let encoder = wordmerge::rayon::ParallelRayonEncoder::new(encoder);
//!
//!     encoder.encode_batch(batch)
//! }
//!
//! let table: TokenTable<u32> = TokenTable::from_learned_symbols(["ash"]).unwrap();
//! let tokens = example(table.into(), &["ash ash".to_string()]);
//! assert_eq!(tokens, vec![vec![0, 0]]);
//! ```

mod longest_prefix_encoder;
#[cfg(test)]
pub mod testing;
mod token_encoder;

#[doc(inline)]
pub use longest_prefix_encoder::LongestPrefixEncoder;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
