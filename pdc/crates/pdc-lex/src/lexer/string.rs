//! Quoted literal lexing.
//!
//! A literal runs from an opening `"` or `'` to the next occurrence of the
//! same quote that is not directly preceded by a backslash. The whole span,
//! quotes included, becomes one token. Escapes are not decoded.

use crate::error::{LexError, Result};
use crate::lexer::state::ScanState;
use crate::position::Position;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a quoted literal whose opening `quote` (at `start`) was just
    /// consumed.
    ///
    /// Fails with `UnterminatedStringLiteral` at the opening quote if a
    /// newline or end of input comes first.
    pub(crate) fn lex_quoted(&mut self, quote: char, start: Position) -> Result<()> {
        self.flush()?;

        let mut literal = String::from(quote);
        let mut prev = quote;
        loop {
            match self.cursor.bump() {
                Some(c) if c == quote && prev != '\\' => {
                    literal.push(c);
                    break;
                },
                Some('\n') | None => {
                    return Err(LexError::UnterminatedStringLiteral {
                        line: start.line,
                        column: start.column,
                        partial: literal,
                    });
                },
                Some(c) => {
                    literal.push(c);
                    prev = c;
                },
            }
        }

        self.commit(&literal, start)?;
        self.state = ScanState::Empty;
        Ok(())
    }
}
