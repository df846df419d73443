//! Crate-wide error type.
//!
//! Recoverable conditions (oversized draws, empty filter results, malformed
//! card records) are not errors. Only failures that must reach the caller
//! live here.

use thiserror::Error;

/// Errors surfaced by loading, importing and configuration.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid deck document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Import failed at line {line}: {message}")]
    Import { line: usize, message: String },

    #[error("No active deck")]
    NoActiveDeck,
}

impl DeckError {
    /// Build an import error for a 1-based line number.
    pub fn import(line: usize, message: impl Into<String>) -> Self {
        DeckError::Import {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
