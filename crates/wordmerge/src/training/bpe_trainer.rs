//! # Vocab Trainer

use crate::errors::{WMResult, WordmergeError};
use crate::spanning::WordSpanner;
use crate::training::CountType;
use crate::training::utility::{PairStats, WordCounter, WordCounterOptions, WordVocab};
use crate::types::SymbolPair;

/// The default merge round budget.
pub const DEFAULT_MAX_MERGES: usize = 500;

/// Options for [`BinaryPairVocabTrainer`].
#[derive(Debug, Clone)]
pub struct BinaryPairVocabTrainerOptions {
    /// The maximum number of merge rounds.
    pub max_merges: usize,

    /// Options for the word counter.
    pub counter: WordCounterOptions,
}

impl Default for BinaryPairVocabTrainerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MERGES)
    }
}

impl BinaryPairVocabTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_merges` - The maximum number of merge rounds.
    ///
    /// ## Returns
    /// A new `BinaryPairVocabTrainerOptions` instance.
    pub fn new(max_merges: usize) -> Self {
        Self {
            max_merges,
            counter: WordCounterOptions::default(),
        }
    }

    /// Sets the maximum number of merge rounds.
    ///
    /// ## Arguments
    /// * `max_merges` - The round budget; `0` disables merging.
    ///
    /// ## Returns
    /// The updated `BinaryPairVocabTrainerOptions` instance.
    pub fn with_max_merges(
        self,
        max_merges: usize,
    ) -> Self {
        Self { max_merges, ..self }
    }

    /// Sets the word counter options.
    pub fn with_counter_options(
        self,
        counter: WordCounterOptions,
    ) -> Self {
        Self { counter, ..self }
    }

    /// Initializes a [`BinaryPairVocabTrainer`] from these options.
    ///
    /// ## Returns
    /// A new `BinaryPairVocabTrainer` instance.
    pub fn init<C: CountType>(self) -> BinaryPairVocabTrainer<C> {
        BinaryPairVocabTrainer::new(self)
    }
}

/// Merge loop states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerState {
    /// Constructed; no round has run.
    Ready,

    /// Merge rounds are in progress.
    Merging,

    /// Terminal; the budget is spent, or no pairs remain.
    Done,
}

/// Basic binary pair train results.
#[derive(Debug, Clone)]
pub struct TrainResults<C: CountType> {
    /// The merged pairs, in the order chosen.
    pub merges: Vec<SymbolPair>,

    /// The final frequency-weighted word vocabulary.
    pub word_vocab: WordVocab<C>,
}

/// The ``Ready -> Merging -> Done`` merge loop over a [`WordVocab`].
///
/// Each [`MergeLoop::step`] performs at most one merge round.
#[derive(Debug, Clone)]
pub struct MergeLoop<C: CountType> {
    state: TrainerState,
    word_vocab: WordVocab<C>,
    merges: Vec<SymbolPair>,
    max_merges: usize,
    last_log_percent: usize,
}

impl<C: CountType> MergeLoop<C> {
    /// Create a new loop in the [`TrainerState::Ready`] state.
    ///
    /// ## Arguments
    /// * `word_vocab` - the initial word vocabulary.
    /// * `max_merges` - the round budget.
    pub fn new(
        word_vocab: WordVocab<C>,
        max_merges: usize,
    ) -> Self {
        Self {
            state: TrainerState::Ready,
            word_vocab,
            merges: Vec::with_capacity(max_merges.min(4096)),
            max_merges,
            last_log_percent: 0,
        }
    }

    /// The current state.
    pub fn state(&self) -> TrainerState {
        self.state
    }

    /// The merges chosen so far.
    pub fn merges(&self) -> &[SymbolPair] {
        &self.merges
    }

    /// The current word vocabulary.
    pub fn word_vocab(&self) -> &WordVocab<C> {
        &self.word_vocab
    }

    /// The number of merge rounds left in the budget.
    pub fn remaining(&self) -> usize {
        self.max_merges - self.merges.len()
    }

    /// Advance the loop by one transition.
    ///
    /// ## Returns
    /// The state after the transition.
    pub fn step(&mut self) -> TrainerState {
        match self.state {
            TrainerState::Ready => {
                log::info!(
                    "Starting merge loop: {} words, {} merges budgeted",
                    self.word_vocab.len(),
                    self.max_merges
                );
                self.state = TrainerState::Merging;
            }
            TrainerState::Merging => self.merge_round(),
            TrainerState::Done => {}
        }
        self.state
    }

    fn merge_round(&mut self) {
        if self.remaining() == 0 {
            self.state = TrainerState::Done;
            return;
        }

        let stats = PairStats::from_word_vocab(&self.word_vocab);
        let Some((pair, count)) = stats.select_best() else {
            log::info!("No pairs left after {} merges", self.merges.len());
            self.state = TrainerState::Done;
            return;
        };
        let pair = pair.clone();

        let merged = self.word_vocab.apply_merge(&pair);
        log::debug!(
            "merge {}: {:?} + {:?} -> {:?} (frequency: {})",
            self.merges.len(),
            pair.0,
            pair.1,
            merged,
            count
        );
        self.merges.push(pair);

        // Log progress every 1%
        let current_percent = (self.merges.len() * 100) / self.max_merges;
        if current_percent > self.last_log_percent {
            log::info!(
                "Progress: {}% ({}/{} merges) - Last merge: {:?} (frequency: {})",
                current_percent,
                self.merges.len(),
                self.max_merges,
                merged,
                count
            );
            self.last_log_percent = current_percent;
        }

        if self.remaining() == 0 {
            self.state = TrainerState::Done;
        }
    }

    /// Run the loop to [`TrainerState::Done`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn run(mut self) -> TrainResults<C> {
        while self.step() != TrainerState::Done {}
        self.finish()
    }

    /// Release the merges and word vocabulary, in whatever state.
    pub fn finish(self) -> TrainResults<C> {
        TrainResults {
            merges: self.merges,
            word_vocab: self.word_vocab,
        }
    }
}

/// Trainer for learning binary pair merges.
///
/// # Parameters
/// * `C` - the type used to store counts in the word counts.
pub struct BinaryPairVocabTrainer<C = u32>
where
    C: CountType,
{
    /// Trainer options.
    pub options: BinaryPairVocabTrainerOptions,

    /// The word counter.
    pub word_counter: WordCounter<C>,
}

impl<C: CountType> BinaryPairVocabTrainer<C> {
    /// Initializes a [`BinaryPairVocabTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    ///
    /// ## Returns
    /// A new `BinaryPairVocabTrainer` instance.
    pub fn new(options: BinaryPairVocabTrainerOptions) -> Self {
        let word_counter = WordCounter::new(WordSpanner::new(), options.counter.clone());
        Self {
            options,
            word_counter,
        }
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.word_counter.update_from_text(text);
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_samples(samples);
    }

    /// Build the [`MergeLoop`] over the counted corpus.
    ///
    /// ## Returns
    /// [`WordmergeError::MissingCorpus`] if no sample was ever supplied.
    pub fn merge_loop(&self) -> WMResult<MergeLoop<C>> {
        if self.word_counter.samples_seen() == 0 {
            return Err(WordmergeError::MissingCorpus);
        }
        Ok(MergeLoop::new(
            self.word_counter.to_word_vocab(),
            self.options.max_merges,
        ))
    }

    /// Train the merge history.
    ///
    /// ## Returns
    /// A `Result` containing the [`TrainResults`];
    /// or [`WordmergeError::MissingCorpus`] if no sample was ever supplied.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train(self) -> WMResult<TrainResults<C>> {
        let merge_loop = self.merge_loop()?;
        log::info!(
            "Training on {} word units ({} distinct)",
            self.word_counter.unit_count(),
            merge_loop.word_vocab().len()
        );

        let results = merge_loop.run();

        log::info!(
            "Finished training: {} merges completed",
            results.merges.len()
        );
        Ok(results)
    }
}
