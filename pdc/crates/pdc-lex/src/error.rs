//! Lexical error types.
//!
//! Every error ends the scan that produced it; the lexer never resumes after
//! reporting one.

use std::path::PathBuf;

use thiserror::Error;

use crate::position::Position;

/// Error produced by a scan.
#[derive(Debug, Error)]
pub enum LexError {
    /// The source file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A character outside every known character class.
    #[error("{line}:{column}: unrecognized character {character:?}")]
    UnrecognizedCharacter {
        line: u32,
        column: u32,
        character: char,
    },

    /// A quoted literal reached a newline or end of input before its closing
    /// quote. The position is that of the opening quote.
    #[error("{line}:{column}: unterminated string literal `{partial}`")]
    UnterminatedStringLiteral {
        line: u32,
        column: u32,
        partial: String,
    },

    /// A block comment reached end of input before `*/`.
    #[error("{line}:{column}: unterminated block comment")]
    UnterminatedComment { line: u32, column: u32 },

    /// A lexeme that is not a valid identifier.
    #[error("{line}:{column}: malformed identifier `{lexeme}`")]
    MalformedIdentifier {
        line: u32,
        column: u32,
        lexeme: String,
    },

    /// A lexeme shaped like a number that is not a valid literal.
    #[error("{line}:{column}: malformed literal `{lexeme}`")]
    MalformedLiteral {
        line: u32,
        column: u32,
        lexeme: String,
    },

    /// Separator lookup failed for a lexeme that passed the membership test.
    #[error("{line}:{column}: unknown separator {lexeme:?}")]
    UnknownSeparator {
        line: u32,
        column: u32,
        lexeme: String,
    },

    /// Operator lookup failed for a lexeme that passed the membership test.
    #[error("{line}:{column}: unknown operator `{lexeme}`")]
    UnknownOperator {
        line: u32,
        column: u32,
        lexeme: String,
    },

    /// Keyword lookup failed for a lexeme that passed the membership test.
    #[error("{line}:{column}: unknown keyword `{lexeme}`")]
    UnknownKeyword {
        line: u32,
        column: u32,
        lexeme: String,
    },
}

impl LexError {
    /// Source location of the error, if it has one.
    pub fn position(&self) -> Option<Position> {
        match *self {
            LexError::Io { .. } => None,
            LexError::UnrecognizedCharacter { line, column, .. }
            | LexError::UnterminatedStringLiteral { line, column, .. }
            | LexError::UnterminatedComment { line, column }
            | LexError::MalformedIdentifier { line, column, .. }
            | LexError::MalformedLiteral { line, column, .. }
            | LexError::UnknownSeparator { line, column, .. }
            | LexError::UnknownOperator { line, column, .. }
            | LexError::UnknownKeyword { line, column, .. } => Some(Position::new(line, column)),
        }
    }

    pub(crate) fn malformed_identifier(lexeme: &str, at: Position) -> Self {
        LexError::MalformedIdentifier {
            line: at.line,
            column: at.column,
            lexeme: lexeme.to_string(),
        }
    }

    pub(crate) fn malformed_literal(lexeme: &str, at: Position) -> Self {
        LexError::MalformedLiteral {
            line: at.line,
            column: at.column,
            lexeme: lexeme.to_string(),
        }
    }
}

/// Result type alias for lexing operations.
pub type Result<T> = std::result::Result<T, LexError>;
