//! # Reserved Tokens
//!
//! Four reserved tokens follow all learned symbols, in a fixed order:
//! [`UNK_TOKEN`], [`PAD_TOKEN`], [`BOS_TOKEN`], [`EOS_TOKEN`].

use crate::types::TokenType;

/// The unknown-symbol token.
pub const UNK_TOKEN: &str = "<unk>";

/// The padding token.
pub const PAD_TOKEN: &str = "<pad>";

/// The beginning-of-sequence token.
pub const BOS_TOKEN: &str = "<bos>";

/// The end-of-sequence token.
pub const EOS_TOKEN: &str = "<eos>";

/// The reserved token names, in id order.
pub const RESERVED_TOKENS: [&str; 4] = [UNK_TOKEN, PAD_TOKEN, BOS_TOKEN, EOS_TOKEN];

/// The ids of the reserved tokens in a [`crate::vocab::TokenTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservedTokens<T: TokenType> {
    /// ``<unk>``
    pub unk: T,

    /// ``<pad>``
    pub pad: T,

    /// ``<bos>``
    pub bos: T,

    /// ``<eos>``
    pub eos: T,
}

impl<T: TokenType> ReservedTokens<T> {
    /// Reserved ids starting at `first`.
    pub fn starting_at(first: T) -> Self {
        let one = T::one();
        Self {
            unk: first,
            pad: first + one,
            bos: first + one + one,
            eos: first + one + one + one,
        }
    }

    /// The ids in [`RESERVED_TOKENS`] order.
    pub fn to_array(&self) -> [T; 4] {
        [self.unk, self.pad, self.bos, self.eos]
    }
}
