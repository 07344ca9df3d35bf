//! # Frequency-Weighted Word Vocabulary

use std::collections::BTreeSet;

use crate::training::CountType;
use crate::training::utility::SymbolSpanBuf;
use crate::types::{Symbol, SymbolPair, WMHashMap};

/// A map of ``{ SymbolSpanBuf -> count }``.
///
/// Each key is one distinct word, split into its current symbols.
/// Distinct words always have distinct concatenations, and merges preserve
/// the concatenation; so keys stay unique across every merge round.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<C: CountType> {
    spans: WMHashMap<SymbolSpanBuf, C>,
}

impl<C: CountType> Default for WordVocab<C> {
    fn default() -> Self {
        Self {
            spans: WMHashMap::default(),
        }
    }
}

impl<C: CountType> FromIterator<(SymbolSpanBuf, C)> for WordVocab<C> {
    fn from_iter<I: IntoIterator<Item = (SymbolSpanBuf, C)>>(iter: I) -> Self {
        let mut vocab = Self::default();
        for (span, count) in iter {
            vocab.add(span, count);
        }
        vocab
    }
}

impl<C: CountType> WordVocab<C> {
    /// Add `count` occurrences of `span`.
    pub fn add(
        &mut self,
        span: SymbolSpanBuf,
        count: C,
    ) {
        *self.spans.entry(span).or_default() += count;
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Is the vocab empty?
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The count of a span; zero if absent.
    pub fn count(
        &self,
        span: &SymbolSpanBuf,
    ) -> C {
        self.spans.get(span).copied().unwrap_or_else(C::zero)
    }

    /// The sum of all counts; the number of word units in the corpus.
    pub fn total_count(&self) -> C {
        self.spans
            .values()
            .fold(C::zero(), |acc, &count| acc + count)
    }

    /// Iterate over ``(span, count)`` entries, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolSpanBuf, C)> + '_ {
        self.spans.iter().map(|(span, &count)| (span, count))
    }

    /// The entries sorted by span, for stable display.
    pub fn sorted_entries(&self) -> Vec<(&SymbolSpanBuf, C)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// The distinct symbols used by any span, in ascending order.
    pub fn distinct_symbols(&self) -> Vec<Symbol> {
        self.spans
            .keys()
            .flat_map(|span| span.symbols().iter())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Replace every occurrence of `pair` in every span with the merged symbol.
    ///
    /// # Returns
    /// The merged symbol, ``pair.0 + pair.1``.
    pub fn apply_merge(
        &mut self,
        pair: &SymbolPair,
    ) -> Symbol {
        let mut replacement = pair.0.clone();
        replacement.push_str(&pair.1);

        let spans = core::mem::take(&mut self.spans);
        self.spans.reserve(spans.len());
        for (mut span, count) in spans {
            span.merge_pair(pair, &replacement);
            self.add(span, count);
        }

        replacement
    }
}
