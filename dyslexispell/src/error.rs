//! Error types for lexicon and configuration loading.
//!
//! Analysis itself never fails; only reading user-supplied data does.
use smol_str::SmolStr;

use crate::lexicon::MatchKind;

/// Errors that can occur when loading or validating a lexicon.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LexiconError {
    /// Error opening or reading a lexicon overlay file
    #[error("I/O error reading '{0}'")]
    Io(String, #[source] std::io::Error),

    /// Overlay is not valid JSON or does not match the lexicon shape
    #[error("Failed to parse lexicon overlay")]
    Json(#[from] serde_json::Error),

    /// The same key is present in two single-correction tables
    #[error("Key {key:?} is present in both the {first} and {second} tables")]
    DuplicateKey {
        /// the offending key
        key: SmolStr,
        /// table the key was first seen in
        first: MatchKind,
        /// table the key was seen in again
        second: MatchKind,
    },

    /// Entry has an empty correction string
    #[error("Entry {0:?} has an empty correction")]
    EmptyCorrection(SmolStr),

    /// Homophone entry has no alternatives
    #[error("Homophone entry {0:?} has no alternatives")]
    EmptyAlternatives(SmolStr),

    /// Key is not a lowercase word the tokenizer could ever produce
    #[error("Invalid lexicon key {0:?}")]
    InvalidKey(SmolStr),
}

/// Errors that can occur when loading a speller configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Error opening or reading the config file
    #[error("I/O error reading '{0}'")]
    Io(String, #[source] std::io::Error),

    /// Config is not valid JSON
    #[error("Failed to parse config")]
    Json(#[from] serde_json::Error),

    /// Minimum word length must be at least one character
    #[error("Minimum word length must be at least 1, got {0}")]
    InvalidMinWordLength(usize),

    /// Homophone alternative cap must be at least one when set
    #[error("n_best must be at least 1 when set")]
    InvalidNBest,
}
