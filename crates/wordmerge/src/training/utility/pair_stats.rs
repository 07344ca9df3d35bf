//! # Pair Statistics

use crate::training::CountType;
use crate::training::utility::WordVocab;
use crate::types::{SymbolPair, WMHashMap};

/// A map from [`SymbolPair`] to its aggregate occurrence count.
pub type PairCountMap<C> = WMHashMap<SymbolPair, C>;

/// Adjacent pair statistics over a [`WordVocab`].
///
/// Rebuilt from scratch every training round.
#[derive(Debug, Clone)]
pub struct PairStats<C: CountType> {
    /// ``sum(count(word) * occurrences(pair, word)) for all words``
    pub pair_counts: PairCountMap<C>,
}

impl<C: CountType> PairStats<C> {
    /// Count every adjacent pair in `vocab`, weighted by word count.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(vocab)))]
    pub fn from_word_vocab(vocab: &WordVocab<C>) -> Self {
        let mut pair_counts = PairCountMap::with_capacity(vocab.len());

        for (span, count) in vocab.iter() {
            for (a, b) in span.pairs() {
                *pair_counts.entry((a.clone(), b.clone())).or_default() += count;
            }
        }

        Self { pair_counts }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pair_counts.len()
    }

    /// Are there no pairs?
    pub fn is_empty(&self) -> bool {
        self.pair_counts.is_empty()
    }

    /// The count of a pair; zero if absent.
    pub fn count(
        &self,
        pair: &SymbolPair,
    ) -> C {
        self.pair_counts.get(pair).copied().unwrap_or_else(C::zero)
    }

    /// Select the pair to merge next.
    ///
    /// The greatest count wins; ties go to the lexicographically
    /// smallest ``(left, right)`` pair.
    ///
    /// # Returns
    /// `None` when there are no pairs.
    pub fn select_best(&self) -> Option<(&SymbolPair, C)> {
        self.pair_counts
            .iter()
            .max_by(|(pa, ca), (pb, cb)| ca.cmp(cb).then_with(|| pb.cmp(pa)))
            .map(|(pair, &count)| (pair, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::utility::SymbolSpanBuf;

    fn pair(
        a: &str,
        b: &str,
    ) -> SymbolPair {
        (a.into(), b.into())
    }

    fn vocab_of(words: &[(&str, u32)]) -> WordVocab<u32> {
        words
            .iter()
            .map(|&(w, c)| (SymbolSpanBuf::from_word(w), c))
            .collect()
    }

    #[test]
    fn test_pair_counts() {
        let vocab = vocab_of(&[("hello", 1), ("world", 2), ("help", 3)]);
        let stats = PairStats::from_word_vocab(&vocab);

        let mut counts: Vec<(String, u32)> = stats
            .pair_counts
            .iter()
            .map(|((a, b), &c)| (format!("{a}{b}"), c))
            .collect();
        counts.sort();

        assert_eq!(
            counts,
            [
                ("el", 4), // 1 h[el]lo, 3 h[el]p
                ("he", 4), // 1 [he]llo, 3 [he]lp
                ("ld", 2), // 2 wor[ld]
                ("ll", 1), // 1 he[ll]o
                ("lo", 1), // 1 hel[lo]
                ("lp", 3), // 3 he[lp]
                ("or", 2), // 2 w[or]ld
                ("rl", 2), // 2 wo[rl]d
                ("wo", 2), // 2 [wo]rld
            ]
            .into_iter()
            .map(|(p, c)| (p.to_string(), c))
            .collect::<Vec<_>>()
        );
        assert_eq!(stats.len(), 9);
        assert_eq!(stats.count(&pair("h", "e")), 4);
        assert_eq!(stats.count(&pair("x", "y")), 0);
    }

    #[test]
    fn test_repeated_pair_in_one_word() {
        let stats = PairStats::from_word_vocab(&vocab_of(&[("aaab", 2)]));
        assert_eq!(stats.count(&pair("a", "a")), 4);
        assert_eq!(stats.count(&pair("a", "b")), 2);
    }

    #[test]
    fn test_select_best() {
        let stats = PairStats::from_word_vocab(&vocab_of(&[("aaab", 1)]));
        assert_eq!(stats.select_best(), Some((&pair("a", "a"), 2)));
    }

    #[test]
    fn test_select_best_tie_break() {
        let stats = PairStats::from_word_vocab(&vocab_of(&[("zy", 3), ("ba", 3), ("bc", 3)]));
        assert_eq!(stats.select_best(), Some((&pair("b", "a"), 3)));

        let mut vocab = vocab_of(&[("aaab", 1)]);
        vocab.apply_merge(&pair("a", "a"));
        let stats = PairStats::from_word_vocab(&vocab);
        assert_eq!(stats.count(&pair("aa", "a")), 1);
        assert_eq!(stats.count(&pair("a", "b")), 1);
        assert_eq!(stats.select_best(), Some((&pair("a", "b"), 1)));
    }

    #[test]
    fn test_select_best_empty() {
        let stats = PairStats::from_word_vocab(&vocab_of(&[("a", 5), ("b", 1)]));
        assert!(stats.is_empty());
        assert_eq!(stats.select_best(), None);
    }
}
