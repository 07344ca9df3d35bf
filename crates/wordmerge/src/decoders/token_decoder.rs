//! # Token Decoder Trait

use crate::errors::WMResult;
use crate::types::TokenType;

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens into their symbols.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The symbols in token order; or
    /// [`crate::WordmergeError::TokenOutOfRange`] for the first unknown token.
    fn decode_to_symbols(
        &self,
        tokens: &[T],
    ) -> WMResult<Vec<&str>>;

    /// Decodes tokens into a string.
    ///
    /// Symbols are concatenated; word boundaries are not recoverable.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    fn decode_to_string(
        &self,
        tokens: &[T],
    ) -> WMResult<String> {
        Ok(self.decode_to_symbols(tokens)?.concat())
    }

    /// Decodes a batch of tokens into strings.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.decode_to_string(tokens))
            .collect()
    }
}
