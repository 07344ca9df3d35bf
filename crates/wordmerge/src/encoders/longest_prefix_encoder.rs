//! # Greedy Longest-Prefix Encoder

use std::sync::Arc;

use crate::encoders::TokenEncoder;
use crate::spanning::WordSpanner;
use crate::types::TokenType;
use crate::vocab::TokenTable;

/// A [`TokenEncoder`] which matches the longest learned symbol at each position.
///
/// Per word unit, the cursor tries the longest remaining prefix first,
/// shrinking one char at a time. The first learned symbol found is emitted;
/// when no prefix matches, ``<unk>`` is emitted and the cursor advances one char.
///
/// Reserved token names are never matched from text.
#[derive(Debug, Clone)]
pub struct LongestPrefixEncoder<T: TokenType> {
    table: Arc<TokenTable<T>>,
    spanner: WordSpanner,
}

impl<T: TokenType> LongestPrefixEncoder<T> {
    /// Construct an encoder over a token table.
    pub fn new(table: Arc<TokenTable<T>>) -> Self {
        Self {
            table,
            spanner: WordSpanner::new(),
        }
    }

    /// The attached token table.
    pub fn table(&self) -> &Arc<TokenTable<T>> {
        &self.table
    }
}

impl<T: TokenType> TokenEncoder<T> for LongestPrefixEncoder<T> {
    fn spanner(&self) -> &WordSpanner {
        &self.spanner
    }

    fn encode_append_span(
        &self,
        span: &str,
        tokens: &mut Vec<T>,
    ) {
        // Byte offsets of each char boundary, including the end.
        let bounds: Vec<usize> = span
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(span.len()))
            .collect();
        let char_len = bounds.len() - 1;
        let max_len = self.table.max_symbol_chars();

        let mut pos = 0;
        'cursor: while pos < char_len {
            // Prefixes longer than any learned symbol can never match.
            let longest = (char_len - pos).min(max_len);
            for len in (1..=longest).rev() {
                let prefix = &span[bounds[pos]..bounds[pos + len]];
                if let Some(token) = self.table.lookup_learned(prefix) {
                    tokens.push(token);
                    pos += len;
                    continue 'cursor;
                }
            }

            tokens.push(self.table.unk_token());
            pos += 1;
        }
    }
}
