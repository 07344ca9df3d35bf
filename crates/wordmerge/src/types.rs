//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use compact_str::CompactString;
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a table is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A vocabulary symbol: one or more characters.
///
/// Training starts from single-character symbols, and grows them by merges.
pub type Symbol = CompactString;

/// A pair of values.
pub type Pair<V> = (V, V);

/// An ordered pair of adjacent symbols.
pub type SymbolPair = Pair<Symbol>;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "std")] {
        /// Type Alias for hash maps in this crate.
        pub type WMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type WMHashSet<V> = std::collections::HashSet<V>;

    } else {
        /// This error exists to give users more direct feedback
        /// on the feature configuration over the other compilation
        /// errors they would encounter from lacking the types.
        compile_error!("wordmerge requires the \"std\" feature");
    }
}

/// Static check that a type is `Send` and `Sync`.
pub fn check_is_send_sync<S: Send + Sync>(_: &S) {}
