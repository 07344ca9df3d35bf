//! # Vocabulary
//!
//! This module provides the token table and related io mechanisms.
//!
//! ## Token Table
//!
//! [`TokenTable`] is the only artifact encoders and decoders depend on:
//! a bijective ``{ Symbol <-> T }`` mapping of
//! * learned symbols, ids ``0..n`` in ascending lexicographic order,
//! * then the [`reserved`] tokens, ``<unk>``, ``<pad>``, ``<bos>``, ``<eos>``.
pub mod io;
pub mod reserved;
pub mod token_table;

#[doc(inline)]
pub use reserved::ReservedTokens;
#[doc(inline)]
pub use token_table::TokenTable;
