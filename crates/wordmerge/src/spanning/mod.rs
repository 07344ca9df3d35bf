//! # Text Spanning
//!
//! Splits raw text into word units before training or encoding.
//!
//! The same [`WordSpanner`] must be used on both sides; the trainer and the
//! [`crate::encoders::LongestPrefixEncoder`] each hold one.

mod word_spanner;

#[doc(inline)]
pub use word_spanner::{WORD_PATTERN, WordSpanner, WordSpans};
