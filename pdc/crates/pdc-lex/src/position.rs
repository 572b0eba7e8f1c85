//! Line/column tracking.
//!
//! Positions are 1-based and only ever move forward. A newline starts a new
//! line at column 1, a tab advances the column by the configured tab width,
//! and every other character (carriage returns and delimiters included)
//! advances the column by one.

use std::fmt;

use serde::Serialize;

/// Column width of a tab character unless configured otherwise.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// Location of a character in the source text.
///
/// # Example
///
/// ```
/// use pdc_lex::Position;
///
/// let mut pos = Position::start();
/// pos.advance('v', 4);
/// pos.advance('\t', 4);
/// assert_eq!((pos.line, pos.column), (1, 6));
/// pos.advance('\n', 4);
/// assert_eq!((pos.line, pos.column), (2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Position {
    /// Creates a position from explicit coordinates.
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of a source.
    pub const fn start() -> Self {
        Self::new(1, 1)
    }

    /// Moves past `c`.
    #[inline]
    pub fn advance(&mut self, c: char, tab_width: u32) {
        match c {
            '\n' => {
                self.line = self.line.saturating_add(1);
                self.column = 1;
            },
            '\t' => self.column = self.column.saturating_add(tab_width),
            _ => self.column = self.column.saturating_add(1),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
