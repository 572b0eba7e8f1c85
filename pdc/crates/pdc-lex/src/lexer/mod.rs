//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the character-class state machine
//! - `state` - Character classes and accumulation states
//! - `comment` - Comment skipping
//! - `string` - Quoted literal lexing
//! - `classify` - Turning finished lexemes into tokens
//! - `number` - Numeric literal grammar
//! - `identifier` - Identifier pattern

pub mod classify;
mod comment;
mod core;
mod identifier;
mod number;
mod state;
mod string;

pub use self::core::Lexer;
pub use classify::classify;
