//! N-gram statistics.

mod entropy;

pub use entropy::{
    ChunkedEntropyResult, EntropyResult, NgramKind, chunked_entropy_from_tokens,
    compute_character_bigram_entropy, compute_ngram_entropy, compute_ngram_entropy_chunked,
    compute_word_bigram_entropy, entropy_from_tokens,
};
