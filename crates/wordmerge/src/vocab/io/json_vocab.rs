//! # JSON Token Table IO
//!
//! The table is one JSON object, ``{ symbol: id, ... }``, written in id order.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::Serialize;

use crate::{errors::WMResult, types::TokenType, vocab::TokenTable};

/// Read a [`TokenTable`] from a JSON reader.
///
/// # Arguments
/// * `reader` - the JSON source.
pub fn read_token_table_json<T, R>(reader: R) -> WMResult<TokenTable<T>>
where
    T: TokenType,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Load a [`TokenTable`] from a JSON file.
///
/// # Arguments
/// * `path` - the path to the table file.
pub fn load_token_table_json_path<T, P>(path: P) -> WMResult<TokenTable<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_token_table_json(reader)
}

/// Write a [`TokenTable`] as JSON.
///
/// # Arguments
/// * `table` - the table to write.
/// * `writer` - the output; flushed before returning.
pub fn write_token_table_json<T, W>(
    table: &TokenTable<T>,
    writer: &mut W,
) -> WMResult<()>
where
    T: TokenType + Serialize,
    W: Write,
{
    serde_json::to_writer(&mut *writer, table)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Save a [`TokenTable`] to a JSON file.
///
/// # Arguments
/// * `table` - the table to save.
/// * `path` - the path to the table file.
pub fn save_token_table_json_path<T, P>(
    table: &TokenTable<T>,
    path: P,
) -> WMResult<()>
where
    T: TokenType + Serialize,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_token_table_json(table, &mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WordmergeError;

    #[test]
    fn test_save_load_json() {
        type T = u32;

        let table: TokenTable<T> =
            TokenTable::from_learned_symbols(["crater", "cone", "vent"]).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.json");

                save_token_table_json_path(&table, &path).expect("Failed to save table");

                let loaded: TokenTable<T> =
                    load_token_table_json_path(&path).expect("Failed to load table");

                assert_eq!(&loaded, &table);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_write_read_json() {
        let table: TokenTable<u16> = TokenTable::from_learned_symbols(["a"]).unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_token_table_json(&table, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf.clone()).unwrap(),
            "{\"a\":0,\"<unk>\":1,\"<pad>\":2,\"<bos>\":3,\"<eos>\":4}\n"
        );

        let loaded: TokenTable<u16> = read_token_table_json(buf.as_slice()).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_token_table_json::<u32, _>("not json".as_bytes()),
            Err(WordmergeError::Json(_))
        ));
        assert!(matches!(
            load_token_table_json_path::<u32, _>("/nonexistent/vocab.json"),
            Err(WordmergeError::Io(_))
        ));
    }
}
