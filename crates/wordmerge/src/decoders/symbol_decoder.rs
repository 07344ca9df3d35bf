//! # Symbol Decoder

use std::sync::Arc;

use crate::decoders::TokenDecoder;
use crate::errors::{WMResult, WordmergeError};
use crate::types::TokenType;
use crate::vocab::TokenTable;

/// A [`TokenDecoder`] backed by a [`TokenTable`].
///
/// Reserved tokens decode to their names, e.g. ``<unk>``.
#[derive(Debug, Clone)]
pub struct SymbolDecoder<T: TokenType> {
    table: Arc<TokenTable<T>>,
}

impl<T: TokenType> SymbolDecoder<T> {
    /// Construct a decoder over a token table.
    pub fn new(table: Arc<TokenTable<T>>) -> Self {
        Self { table }
    }

    /// The attached token table.
    pub fn table(&self) -> &Arc<TokenTable<T>> {
        &self.table
    }
}

impl<T: TokenType> TokenDecoder<T> for SymbolDecoder<T> {
    fn decode_to_symbols(
        &self,
        tokens: &[T],
    ) -> WMResult<Vec<&str>> {
        tokens
            .iter()
            .map(|&token| {
                self.table.lookup_symbol(token).ok_or_else(|| {
                    WordmergeError::TokenOutOfRange(token.to_u64().unwrap_or(u64::MAX))
                })
            })
            .collect()
    }
}
