use word::WordTokens;

pub mod case_handling;
pub mod locate;
pub mod word;

pub use word::{Position, WordToken};

/// Words shorter than this are too noisy to be worth flagging.
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

pub trait Tokenize {
    fn word_tokens(&self) -> WordTokens;
    fn word_tokens_with_min_len(&self, min_len: usize) -> WordTokens;
}

impl Tokenize for str {
    fn word_tokens(&self) -> WordTokens {
        WordTokens::new(self)
    }

    fn word_tokens_with_min_len(&self, min_len: usize) -> WordTokens {
        WordTokens::new_with_min_len(self, min_len)
    }
}

/// Collects every word of at least [`DEFAULT_MIN_WORD_LEN`] chars.
pub fn extract(text: &str) -> Vec<WordToken<'_>> {
    text.word_tokens().collect()
}
