//! Character classes and accumulation states of the scanner.

use crate::token::Separator;

/// What kind of lexeme is currently being accumulated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Nothing in progress.
    Empty,
    /// The last character was a separator.
    Separator,
    /// Letters, digits and underscores.
    Alphanumeric,
    /// Operator symbols such as `:=` or `<=`.
    OperatorSymbol,
}

/// Fixed classification of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Alphanumeric,
    Separator,
    OperatorSymbol,
    Unrecognized,
}

impl CharClass {
    /// Classifies `c`. Brackets, quotes and comment openers are handled
    /// before classification and come out as `Unrecognized` here.
    pub fn of(c: char) -> Self {
        match c {
            c if c.is_ascii_alphanumeric() || c == '_' => CharClass::Alphanumeric,
            ' ' | '\t' | '\n' | '\r' | ';' | ',' | '.' => CharClass::Separator,
            '+' | '-' | '*' | '/' | '=' | '<' | '>' | ':' => CharClass::OperatorSymbol,
            _ => CharClass::Unrecognized,
        }
    }

    /// The state this class moves the scanner into.
    pub fn state(self) -> Option<ScanState> {
        match self {
            CharClass::Alphanumeric => Some(ScanState::Alphanumeric),
            CharClass::Separator => Some(ScanState::Separator),
            CharClass::OperatorSymbol => Some(ScanState::OperatorSymbol),
            CharClass::Unrecognized => None,
        }
    }
}

/// Brackets always form single-character tokens.
pub fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Opening (and closing) delimiters of string literals.
pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'')
}

/// Separators that become tokens rather than being silently consumed.
pub fn is_persistent_separator(c: char) -> bool {
    let mut buf = [0; 4];
    Separator::from_symbol(c.encode_utf8(&mut buf)).is_some_and(Separator::is_persistent)
}
