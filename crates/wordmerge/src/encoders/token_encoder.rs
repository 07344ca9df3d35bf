//! # Token Encoder Trait

use crate::spanning::WordSpanner;
use crate::types::TokenType;

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached word spanner.
    fn spanner(&self) -> &WordSpanner;

    /// Encode one word unit, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `span` - The word unit to encode; contains no whitespace.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_span(
        &self,
        span: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.spanner()
            .split(text)
            .for_each(|span| self.encode_append_span(span, tokens));
    }

    /// Encode text into tokens.
    ///
    /// Never fails; characters with no learned symbol become ``<unk>``.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens.
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<T> {
        let text = text.as_ref();
        let mut tokens = Vec::with_capacity(text.len() / 2);
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A vector of token vectors.
    fn encode_batch(
        &self,
        batch: &[String],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|s| self.encode(s)).collect()
    }
}
