//! # Token Table IO

mod json_vocab;

#[doc(inline)]
pub use json_vocab::{
    load_token_table_json_path, read_token_table_json, save_token_table_json_path,
    write_token_table_json,
};
