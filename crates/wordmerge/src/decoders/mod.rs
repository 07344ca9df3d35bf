//! # Token Decoders
//!
//! Maps token ids back to their symbols.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wordmerge::decoders::{SymbolDecoder, TokenDecoder};
//! use wordmerge::vocab::TokenTable;
//!
//! let table: Arc<TokenTable<u32>> =
//!     Arc::new(TokenTable::from_learned_symbols(["lo", "w"]).unwrap());
//! let decoder = SymbolDecoder::new(table);
//! assert_eq!(decoder.decode_to_string(&[0, 1]).unwrap(), "low");
//! ```

mod symbol_decoder;
mod token_decoder;

#[doc(inline)]
pub use symbol_decoder::SymbolDecoder;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
