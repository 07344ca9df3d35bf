//! # Trainer Implementation Utilities

mod pair_stats;
#[doc(inline)]
pub use pair_stats::{PairCountMap, PairStats};

mod symbol_span_buffer;
#[doc(inline)]
pub use symbol_span_buffer::SymbolSpanBuf;

mod word_counter;
#[doc(inline)]
pub use word_counter::{WordCounter, WordCounterOptions};

mod word_vocab;
#[doc(inline)]
pub use word_vocab::WordVocab;
