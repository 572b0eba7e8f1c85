//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct, the single forward-only reader
//! the lexer pulls characters from. Every consumed character moves the
//! cursor's [`Position`], whichever part of the lexer consumed it.

use std::str::Chars;

use crate::position::{Position, DEFAULT_TAB_WIDTH};

/// A cursor for traversing source code character by character.
///
/// The cursor offers exactly one character of lookahead through
/// [`peek`](Cursor::peek); there is no way to move backwards.
///
/// # Example
///
/// ```
/// use pdc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x:=1");
/// assert_eq!(cursor.bump(), Some('x'));
/// assert_eq!(cursor.peek(), Some(':'));
/// assert_eq!(cursor.position().column, 2);
/// ```
pub struct Cursor<'a> {
    /// Remaining characters of the source.
    chars: Chars<'a>,

    /// Position of the next character to be consumed.
    position: Position,

    /// Columns a tab character occupies.
    tab_width: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor using the default tab width.
    pub fn new(source: &'a str) -> Self {
        Self::with_tab_width(source, DEFAULT_TAB_WIDTH)
    }

    /// Creates a new cursor that advances `tab_width` columns per tab.
    pub fn with_tab_width(source: &'a str, tab_width: u32) -> Self {
        Self {
            chars: source.chars(),
            position: Position::start(),
            tab_width,
        }
    }

    /// Consumes the next character, or returns `None` at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use pdc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.bump();
    /// cursor.bump();
    /// assert_eq!(cursor.position().line, 2);
    /// assert_eq!(cursor.bump(), Some('b'));
    /// assert_eq!(cursor.bump(), None);
    /// ```
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position.advance(c, self.tab_width);
        Some(c)
    }

    /// Returns the next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Consumes the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Position of the next character to be consumed.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        self.chars.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("var x");
        assert_eq!(cursor.peek(), Some('v'));
        assert_eq!(cursor.position(), Position::start());
        assert!(!cursor.remaining().is_empty());
    }

    #[test]
    fn test_bump_sequence() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.bump(), Some('b'));
        assert_eq!(cursor.bump(), Some('c'));
        assert_eq!(cursor.bump(), None);
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn test_peek_does_not_move() {
        let mut cursor = Cursor::new("/*");
        cursor.bump();
        assert_eq!(cursor.peek(), Some('*'));
        assert_eq!(cursor.peek(), Some('*'));
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn test_eat() {
        let mut cursor = Cursor::new("=>");
        assert!(cursor.eat('='));
        assert!(!cursor.eat('='));
        assert!(cursor.eat('>'));
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\n\tc");
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.position(), Position::new(1, 3));
        cursor.bump();
        assert_eq!(cursor.position(), Position::new(2, 1));
        cursor.bump();
        assert_eq!(cursor.position(), Position::new(2, 5));
    }

    #[test]
    fn test_custom_tab_width() {
        let mut cursor = Cursor::with_tab_width("\t", 2);
        cursor.bump();
        assert_eq!(cursor.position().column, 3);
    }

    #[test]
    fn test_remaining() {
        let mut cursor = Cursor::new("var x");
        cursor.bump();
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.remaining(), " x");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.remaining().is_empty());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.bump(), None);
        assert_eq!(cursor.position(), Position::start());
    }
}
