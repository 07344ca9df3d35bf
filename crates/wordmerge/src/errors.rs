//! # Error Types

/// Errors from wordmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum WordmergeError {
    /// Training was requested before any corpus text was supplied.
    #[error("no corpus supplied to the trainer")]
    MissingCorpus,

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Token table data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the table.
    #[error("token out of range: {0}")]
    TokenOutOfRange(u64),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for wordmerge operations.
pub type WMResult<T> = core::result::Result<T, WordmergeError>;
