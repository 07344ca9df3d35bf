//! # Encoder Test Utilities

use std::sync::Arc;

use crate::decoders::{SymbolDecoder, TokenDecoder};
use crate::encoders::TokenEncoder;
use crate::training::BinaryPairVocabTrainerOptions;
use crate::types::{TokenType, check_is_send_sync};
use crate::vocab::TokenTable;

/// Samples shared by the common encoder tests.
pub const COMMON_SAMPLES: [&str; 3] = [
    "hello world",
    "hello san francisco",
    "it's not the heat, it's the salt",
];

/// Build a [`TokenTable`] fully trained on [`COMMON_SAMPLES`].
pub fn common_encoder_test_table<T: TokenType>() -> Arc<TokenTable<T>> {
    let mut trainer = BinaryPairVocabTrainerOptions::default().init::<u32>();
    trainer.update_from_samples(COMMON_SAMPLES);
    let results = trainer.train().unwrap();
    Arc::new(TokenTable::from_train_results(&results).unwrap())
}

/// Common [`TokenEncoder`] tests.
pub fn common_encoder_tests<T: TokenType, E: TokenEncoder<T> + Clone>(
    table: Arc<TokenTable<T>>,
    encoder: &E,
) {
    check_is_send_sync(encoder);
    let encoder: Arc<E> = encoder.clone().into();

    let decoder = SymbolDecoder::new(table.clone());

    let batch: Vec<String> = COMMON_SAMPLES.iter().map(|s| s.to_string()).collect();
    let token_batch = encoder.encode_batch(&batch);
    assert_eq!(token_batch.len(), batch.len());

    for (sample, tokens) in batch.iter().zip(token_batch.iter()) {
        assert_eq!(&encoder.encode(sample), tokens);
        assert!(!tokens.contains(&table.unk_token()));

        // Whitespace is not recoverable.
        let expected: String = sample.split_whitespace().collect();
        assert_eq!(decoder.decode_to_string(tokens).unwrap(), expected);
    }

    let unk = table.unk_token();
    assert_eq!(encoder.encode("~"), vec![unk]);
    assert!(encoder.encode("   ").is_empty());
}
