//! # Error Types for LEXA
//!
//! Unified error handling across both LEXA crates.

use thiserror::Error;

/// Main error type for LEXA operations
#[derive(Error, Debug)]
pub enum LexaError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lexicon construction/lookup error
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// A lexicon entry reached matrix construction without its sets.
    /// This is a data inconsistency in the lexicon build, not a runtime
    /// condition, so construction aborts.
    #[error("word '{word}' has no precomputed bigram/letter sets")]
    MissingNgrams { word: String },

    /// Matrix cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for LEXA operations
pub type LexaResult<T> = Result<T, LexaError>;

impl LexaError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a lexicon error
    pub fn lexicon(msg: impl Into<String>) -> Self {
        Self::Lexicon(msg.into())
    }

    /// Create a cache error
    pub fn cache(msg: impl Into<String>) -> Self {
        Self::Cache(msg.into())
    }

    /// Create a serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
