//! # Word Counter

use compact_str::CompactString;

use crate::spanning::WordSpanner;
use crate::training::CountType;
use crate::training::utility::{SymbolSpanBuf, WordVocab};
use crate::types::WMHashMap;

/// Options for [`WordCounter`].
#[derive(Debug, Clone)]
pub struct WordCounterOptions {
    /// Initial capacity of the word count map.
    pub initial_capacity: usize,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 10_000,
        }
    }
}

impl WordCounterOptions {
    /// Set the initial capacity of the word count map.
    pub fn with_initial_capacity(
        self,
        initial_capacity: usize,
    ) -> Self {
        Self { initial_capacity }
    }
}

/// Word counter structure.
///
/// Counts each distinct word unit produced by a [`WordSpanner`].
pub struct WordCounter<C: CountType> {
    /// The config options.
    pub options: WordCounterOptions,

    /// The word spanner.
    pub spanner: WordSpanner,

    /// The word counts.
    pub word_counts: WMHashMap<CompactString, C>,

    samples_seen: usize,
}

impl<C: CountType> WordCounter<C> {
    /// Create a new word counter.
    pub fn new(
        spanner: WordSpanner,
        options: WordCounterOptions,
    ) -> Self {
        Self {
            word_counts: WMHashMap::with_capacity(options.initial_capacity),
            options,
            spanner,
            samples_seen: 0,
        }
    }

    /// The number of samples fed to this counter; empty samples included.
    pub fn samples_seen(&self) -> usize {
        self.samples_seen
    }

    /// The total number of word units counted.
    pub fn unit_count(&self) -> C {
        self.word_counts
            .values()
            .fold(C::zero(), |acc, &count| acc + count)
    }

    /// Release the word counts and return them.
    pub fn release(self) -> WMHashMap<CompactString, C> {
        self.word_counts
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.samples_seen += 1;
        let word_counts = &mut self.word_counts;
        for word in self.spanner.split(text.as_ref()) {
            *word_counts.entry(word.into()).or_default() += C::one();
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Build the initial frequency-weighted [`WordVocab`].
    ///
    /// Each word becomes one single-character symbol per `char`.
    pub fn to_word_vocab(&self) -> WordVocab<C> {
        self.word_counts
            .iter()
            .map(|(word, &count)| (SymbolSpanBuf::from_word(word), count))
            .collect()
    }
}
