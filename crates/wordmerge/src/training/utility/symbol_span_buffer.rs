//! # Symbol Span Buffer

use core::fmt;

use crate::types::{Symbol, SymbolPair};

/// A mutable span of symbols (one pre-tokenized "word").
///
/// Iteratively rewritten during vocabulary training.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolSpanBuf {
    symbols: Vec<Symbol>,
}

impl<S: Into<Symbol>> FromIterator<S> for SymbolSpanBuf {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl SymbolSpanBuf {
    /// Create a new span buf with one symbol per character of `word`.
    pub fn from_word<S: AsRef<str>>(word: S) -> Self {
        let mut buf = [0u8; 4];
        word.as_ref()
            .chars()
            .map(|c| Symbol::from(&*c.encode_utf8(&mut buf)))
            .collect()
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Get the number of symbols in the span.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this span empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the adjacent ``(a, b)`` symbol windows of this span.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// The canonical rendering: symbols joined by a single space.
    pub fn canonical(&self) -> String {
        self.symbols.join(" ")
    }

    /// The concatenation of all symbols; the original word.
    pub fn concat(&self) -> String {
        self.symbols.concat()
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// Occurrences are matched on whole symbols, scanning left to right.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `replacement` - the merged symbol; normally `pair.0 + pair.1`.
    ///
    /// # Returns
    /// The number of occurrences replaced.
    pub fn merge_pair(
        &mut self,
        pair: &SymbolPair,
        replacement: &Symbol,
    ) -> usize {
        let (a, b) = pair;
        let n = self.symbols.len();

        if n < 2 {
            return 0;
        }

        let mut merged = 0;
        let mut new_symbols: Vec<Symbol> = Vec::with_capacity(n);

        let mut i = 0;
        while i < n {
            if i + 1 < n && &self.symbols[i] == a && &self.symbols[i + 1] == b {
                new_symbols.push(replacement.clone());
                merged += 1;

                // Skip 'a' and 'b'.
                i += 2;
            } else {
                new_symbols.push(self.symbols[i].clone());
                i += 1;
            }
        }

        if merged > 0 {
            self.symbols = new_symbols;
        }
        merged
    }
}

impl fmt::Display for SymbolSpanBuf {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
