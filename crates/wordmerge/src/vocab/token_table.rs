//! # Token Table ``{ Symbol <-> T }``

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{WMResult, WordmergeError};
use crate::training::{CountType, TrainResults};
use crate::training::utility::WordVocab;
use crate::types::{Symbol, TokenType, WMHashMap};
use crate::vocab::reserved::{RESERVED_TOKENS, ReservedTokens};

/// A bijective ``{ Symbol <-> T }`` table with dense ids from zero.
///
/// Learned symbols hold ids ``0..learned_len()``; the four
/// [`RESERVED_TOKENS`] hold the last four ids.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTable<T: TokenType> {
    /// ``symbols[id]``; learned symbols, then reserved tokens.
    symbols: Vec<Symbol>,

    /// ``{ symbol -> id }``; all symbols.
    symbol_ids: WMHashMap<Symbol, T>,

    /// The number of learned symbols.
    learned: usize,

    /// The longest learned symbol, in chars.
    max_symbol_chars: usize,

    reserved: ReservedTokens<T>,
}

fn token_from_usize<T: TokenType>(id: usize) -> WMResult<T> {
    T::from_usize(id).ok_or(WordmergeError::VocabSizeOverflow { size: id + 1 })
}

impl<T: TokenType> TokenTable<T> {
    /// Build a table from learned symbols, in id order.
    ///
    /// Learned symbols receive ids ``0..n``;
    /// then ``<unk>``, ``<pad>``, ``<bos>``, ``<eos>`` receive ``n..n+4``.
    ///
    /// ## Arguments
    /// * `symbols` - the learned symbols; each must be distinct, non-empty,
    ///   and not a reserved token name.
    pub fn from_learned_symbols<I, S>(symbols: I) -> WMResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut table_symbols: Vec<Symbol> = symbols.into_iter().map(Into::into).collect();
        let learned = table_symbols.len();

        if let Some(s) = table_symbols
            .iter()
            .find(|s| s.is_empty() || RESERVED_TOKENS.contains(&s.as_str()))
        {
            return Err(WordmergeError::VocabConflict(format!(
                "invalid learned symbol: {s:?}"
            )));
        }

        let max_symbol_chars = table_symbols
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);

        table_symbols.extend(RESERVED_TOKENS.iter().map(|&s| Symbol::from(s)));

        let mut symbol_ids: WMHashMap<Symbol, T> = WMHashMap::with_capacity(table_symbols.len());
        for (id, symbol) in table_symbols.iter().enumerate() {
            let token: T = token_from_usize(id)?;
            if symbol_ids.insert(symbol.clone(), token).is_some() {
                return Err(WordmergeError::VocabConflict(format!(
                    "duplicate symbol: {symbol:?}"
                )));
            }
        }

        let reserved = ReservedTokens::starting_at(token_from_usize(learned)?);

        Ok(Self {
            symbols: table_symbols,
            symbol_ids,
            learned,
            max_symbol_chars,
            reserved,
        })
    }

    /// Build a table from the surviving symbols of a trained [`WordVocab`].
    ///
    /// Learned symbols are numbered in ascending lexicographic order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(word_vocab)))]
    pub fn from_word_vocab<C: CountType>(word_vocab: &WordVocab<C>) -> WMResult<Self> {
        let table = Self::from_learned_symbols(word_vocab.distinct_symbols())?;
        log::info!(
            "Built token table: {} learned symbols, {} total",
            table.learned_len(),
            table.len()
        );
        Ok(table)
    }

    /// Build a table from [`TrainResults`].
    pub fn from_train_results<C: CountType>(results: &TrainResults<C>) -> WMResult<Self> {
        Self::from_word_vocab(&results.word_vocab)
    }

    /// Rebuild a table from ``(symbol, id)`` records.
    ///
    /// Each symbol must appear once; the ids must be exactly ``0..n``, and
    /// the last four ids must be the [`RESERVED_TOKENS`] in order.
    pub fn from_symbol_ids<I, S>(records: I) -> WMResult<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<Symbol>,
    {
        let mut seen: WMHashMap<Symbol, u64> = WMHashMap::default();
        let mut by_id: BTreeMap<u64, Symbol> = BTreeMap::new();
        for (symbol, id) in records {
            let symbol = symbol.into();
            if let Some(prev) = seen.insert(symbol.clone(), id) {
                return Err(WordmergeError::VocabConflict(format!(
                    "duplicate symbol {symbol:?} with ids {prev} and {id}"
                )));
            }
            if let Some(prev) = by_id.insert(id, symbol.clone()) {
                return Err(WordmergeError::VocabConflict(format!(
                    "id {id} assigned to both {prev:?} and {symbol:?}"
                )));
            }
        }

        if let Some((pos, id)) = by_id
            .keys()
            .enumerate()
            .find(|&(pos, &id)| pos as u64 != id)
        {
            return Err(WordmergeError::VocabConflict(format!(
                "ids are not contiguous: expected {pos}, found {id}"
            )));
        }

        let mut symbols: Vec<Symbol> = by_id.into_values().collect();
        let split = symbols.len().checked_sub(RESERVED_TOKENS.len()).ok_or_else(|| {
            WordmergeError::VocabConflict("missing reserved tokens".to_string())
        })?;
        if symbols[split..].iter().map(Symbol::as_str).ne(RESERVED_TOKENS) {
            return Err(WordmergeError::VocabConflict(format!(
                "reserved tokens must be the last ids, in order: {RESERVED_TOKENS:?}"
            )));
        }

        symbols.truncate(split);
        Self::from_learned_symbols(symbols)
    }

    /// The total number of ids; learned and reserved.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a table holds at least the reserved tokens.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The number of learned symbols.
    pub fn learned_len(&self) -> usize {
        self.learned
    }

    /// The longest learned symbol, in chars.
    pub fn max_symbol_chars(&self) -> usize {
        self.max_symbol_chars
    }

    /// The reserved token ids.
    pub fn reserved(&self) -> ReservedTokens<T> {
        self.reserved
    }

    /// The ``<unk>`` token id.
    pub fn unk_token(&self) -> T {
        self.reserved.unk
    }

    /// Look up the id of any symbol, reserved tokens included.
    pub fn lookup_token(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.symbol_ids.get(symbol).copied()
    }

    /// Look up the id of a learned symbol; reserved tokens never match.
    pub fn lookup_learned(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.lookup_token(symbol)
            .filter(|t| t.to_usize().is_some_and(|id| id < self.learned))
    }

    /// Look up the symbol for an id.
    pub fn lookup_symbol(
        &self,
        token: T,
    ) -> Option<&str> {
        token
            .to_usize()
            .and_then(|id| self.symbols.get(id))
            .map(Symbol::as_str)
    }

    /// The learned symbols, in id order.
    pub fn learned_symbols(&self) -> &[Symbol] {
        &self.symbols[..self.learned]
    }

    /// Iterate over ``(symbol, id)`` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.symbols
            .iter()
            .filter_map(|s| self.symbol_ids.get(s).map(|&t| (s.as_str(), t)))
    }
}

impl<T: TokenType + Serialize> Serialize for TokenTable<T> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Reads a ``{ symbol: id }`` map in document order, keeping repeated keys.
struct TokenTableVisitor<T>(PhantomData<T>);

impl<'de, T: TokenType> Visitor<'de> for TokenTableVisitor<T> {
    type Value = TokenTable<T>;

    fn expecting(
        &self,
        formatter: &mut fmt::Formatter,
    ) -> fmt::Result {
        formatter.write_str("a map of symbols to token ids")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> Result<Self::Value, A::Error> {
        let mut records: Vec<(String, u64)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(record) = map.next_entry::<String, u64>()? {
            records.push(record);
        }
        TokenTable::from_symbol_ids(records).map_err(serde::de::Error::custom)
    }
}

impl<'de, T: TokenType> Deserialize<'de> for TokenTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TokenTableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::utility::SymbolSpanBuf;
    use crate::vocab::reserved::{BOS_TOKEN, EOS_TOKEN, PAD_TOKEN, UNK_TOKEN};

    #[test]
    fn test_reserved_only() {
        let table = TokenTable::<u32>::from_learned_symbols(Vec::<Symbol>::new()).unwrap();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert_eq!(table.learned_len(), 0);
        assert_eq!(table.max_symbol_chars(), 0);
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(UNK_TOKEN, 0), (PAD_TOKEN, 1), (BOS_TOKEN, 2), (EOS_TOKEN, 3)]
        );
        assert_eq!(table.reserved().to_array(), [0, 1, 2, 3]);
    }

    #[test]
    fn test_learned_then_reserved() {
        let table = TokenTable::<u16>::from_learned_symbols(["lo", "w", "er"]).unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(table.learned_len(), 3);
        assert_eq!(table.max_symbol_chars(), 2);
        assert_eq!(table.learned_symbols(), &["lo", "w", "er"]);

        assert_eq!(table.lookup_token("lo"), Some(0));
        assert_eq!(table.lookup_token("er"), Some(2));
        assert_eq!(table.lookup_token("x"), None);

        assert_eq!(table.unk_token(), 3);
        assert_eq!(table.reserved().to_array(), [3, 4, 5, 6]);
        assert_eq!(table.lookup_token(EOS_TOKEN), Some(6));
        assert_eq!(table.lookup_learned(EOS_TOKEN), None);
        assert_eq!(table.lookup_learned("w"), Some(1));

        assert_eq!(table.lookup_symbol(1), Some("w"));
        assert_eq!(table.lookup_symbol(4), Some(PAD_TOKEN));
        assert_eq!(table.lookup_symbol(7), None);
    }

    #[test]
    fn test_ids_are_dense_and_unique() {
        let table = TokenTable::<u32>::from_learned_symbols(["c", "b", "a", "ab"]).unwrap();
        let ids: Vec<u32> = table.iter().map(|(_, t)| t).collect();
        assert_eq!(ids, (0..8).collect::<Vec<u32>>());

        let mut symbols: Vec<&str> = table.iter().map(|(s, _)| s).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), table.len());
    }

    #[test]
    fn test_rejects_bad_symbols() {
        assert!(matches!(
            TokenTable::<u32>::from_learned_symbols(["a", "a"]),
            Err(WordmergeError::VocabConflict(_))
        ));
        assert!(matches!(
            TokenTable::<u32>::from_learned_symbols(["a", UNK_TOKEN]),
            Err(WordmergeError::VocabConflict(_))
        ));
        assert!(matches!(
            TokenTable::<u32>::from_learned_symbols([""]),
            Err(WordmergeError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_token_type_overflow() {
        let symbols: Vec<String> = (0..300).map(|i| format!("s{i}")).collect();
        assert!(matches!(
            TokenTable::<u8>::from_learned_symbols(symbols),
            Err(WordmergeError::VocabSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_from_word_vocab_sorted() {
        let vocab: WordVocab<u32> = [
            (SymbolSpanBuf::from_iter(["vol", "c", "ano"]), 2),
            (SymbolSpanBuf::from_iter(["ash"]), 1),
            (SymbolSpanBuf::from_iter(["c", "one"]), 1),
        ]
        .into_iter()
        .collect();

        let table = TokenTable::<u32>::from_word_vocab(&vocab).unwrap();
        assert_eq!(
            table.learned_symbols(),
            &["ano", "ash", "c", "one", "vol"]
        );
        assert_eq!(table.reserved().to_array(), [5, 6, 7, 8]);
    }

    #[test]
    fn test_from_symbol_ids() {
        let table = TokenTable::<u32>::from_learned_symbols(["b", "a"]).unwrap();

        let mut records: Vec<(String, u64)> = table
            .iter()
            .map(|(s, t)| (s.to_string(), t as u64))
            .collect();
        records.reverse();
        let rebuilt = TokenTable::<u32>::from_symbol_ids(records).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_from_symbol_ids_rejects_gaps() {
        let records = vec![
            ("a", 0),
            (UNK_TOKEN, 2),
            (PAD_TOKEN, 3),
            (BOS_TOKEN, 4),
            (EOS_TOKEN, 5),
        ];
        assert!(matches!(
            TokenTable::<u32>::from_symbol_ids(records),
            Err(WordmergeError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_from_symbol_ids_rejects_misplaced_reserved() {
        let records = vec![
            (UNK_TOKEN, 0),
            ("a", 1),
            (PAD_TOKEN, 2),
            (BOS_TOKEN, 3),
            (EOS_TOKEN, 4),
        ];
        assert!(matches!(
            TokenTable::<u32>::from_symbol_ids(records),
            Err(WordmergeError::VocabConflict(_))
        ));

        assert!(matches!(
            TokenTable::<u32>::from_symbol_ids(vec![("a", 0)]),
            Err(WordmergeError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_json_serialization() {
        let table = TokenTable::<u32>::from_learned_symbols(["lava", "ash"]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"lava":0,"ash":1,"<unk>":2,"<pad>":3,"<bos>":4,"<eos>":5}"#
        );

        let loaded: TokenTable<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, table);

        assert!(serde_json::from_str::<TokenTable<u32>>(r#"{"a":0}"#).is_err());
    }

    #[test]
    fn test_from_symbol_ids_rejects_duplicate_symbols() {
        let records = vec![
            ("a", 0),
            ("a", 1),
            (UNK_TOKEN, 2),
            (PAD_TOKEN, 3),
            (BOS_TOKEN, 4),
            (EOS_TOKEN, 5),
        ];
        match TokenTable::<u32>::from_symbol_ids(records) {
            Err(WordmergeError::VocabConflict(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_duplicate_keys() {
        // The repeated key would otherwise leave id 0 unreferenced.
        let json = r#"{"a":0,"b":1,"a":1,"<unk>":2,"<pad>":3,"<bos>":4,"<eos>":5}"#;
        let err = serde_json::from_str::<TokenTable<u32>>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate symbol"));

        let json = r#"{"a":0,"a":0,"<unk>":1,"<pad>":2,"<bos>":3,"<eos>":4}"#;
        assert!(serde_json::from_str::<TokenTable<u32>>(json).is_err());
    }
}
