//! pdc-lex - Lexical Analyzer for the Project D Programming Language
//!
//! This crate turns Project D source text into a flat, ordered sequence of
//! classified tokens for the parser.
//!
//! # Overview
//!
//! The lexer reads the source once, front to back. A small state machine
//! groups characters into lexemes by character class (alphanumeric,
//! operator symbol, separator); brackets, quoted literals and comments are
//! recognized ahead of that grouping. Each finished lexeme is classified into
//! one of five families and carries the line and column of its first
//! character. The first lexical error aborts the whole scan.
//!
//! # Example Usage
//!
//! ```
//! use pdc_lex::{tokenize, Keyword, Operator, TokenKind};
//!
//! let tokens = tokenize("var x := 42\n").unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Var));
//! assert_eq!(tokens[2].kind, TokenKind::Operator(Operator::Assign));
//! assert_eq!((tokens[3].line, tokens[3].column), (1, 10));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`position`] - Line/column tracking
//! - [`error`] - Lexical error types
//! - [`config`] - Lexer configuration
//!
//! # Token Categories
//!
//! ## Separators
//!
//! `(` `)` `[` `]` `{` `}` `;` `,` `.` and newline. Spaces, tabs and carriage
//! returns only delimit other tokens.
//!
//! ## Operators
//!
//! - **Assignment**: `:=`
//! - **Logical**: `not`, `or`, `and`, `xor`, `is`
//! - **Comparison**: `<`, `<=`, `>`, `>=`, `=`, `/=`
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Other**: `=>`, `..`
//!
//! ## Keywords
//!
//! `var`, `true`, `false`, `end`, `if`, `then`, `else`, `for`, `while`, `in`,
//! `loop`, `print`, `return`, `int`, `real`, `bool`, `string`, `func`,
//! `array`, `tuple`
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Real**: `3.14`
//! - **String**: `"hello"`, `'world'` (escapes are kept verbatim)
//! - **Empty**: `empty`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Comments
//!
//! `// to end of line` and `/* block */`

#![warn(rustdoc::missing_crate_level_docs)]

use std::fs;
use std::path::Path;

use tracing::info;

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod position;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, Result};
pub use lexer::{classify, Lexer};
pub use position::Position;
pub use token::{Keyword, Literal, Operator, Separator, Token, TokenKind};

/// Tokenizes in-memory source text with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}

/// Reads and tokenizes the file at `path` with the default configuration.
///
/// Fails with [`LexError::Io`] before producing any token if the file cannot
/// be opened or is not valid UTF-8.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Token>> {
    tokenize_file_with(path, &LexerConfig::default())
}

/// Reads and tokenizes the file at `path`.
pub fn tokenize_file_with(path: impl AsRef<Path>, config: &LexerConfig) -> Result<Vec<Token>> {
    let path = path.as_ref();
    info!(path = %path.display(), "initializing lexer");

    let source = fs::read_to_string(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Lexer::with_config(&source, config).tokenize()
}
