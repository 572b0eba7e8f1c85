//! Error handling module for the pdt CLI.
//!
//! Custom error types built on `thiserror`. Lexical errors from `pdc-lex`
//! convert into [`PdtError::Lex`] so `?` works across the crate boundary.

use pdc_lex::LexError;
use thiserror::Error;

/// Main error type for the pdt CLI application.
#[derive(Error, Debug)]
pub enum PdtError {
    /// Error when the configuration is missing, unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command ran but did not succeed for every input.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error raised while lexing a source file.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PdtError.
pub type Result<T> = std::result::Result<T, PdtError>;
