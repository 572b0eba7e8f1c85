//! Comment skipping.
//!
//! `//` discards everything up to and including the next newline, `/*`
//! discards everything up to and including the next `*/`. Neither produces a
//! token. Block comments do not nest.

use crate::error::{LexError, Result};
use crate::lexer::state::ScanState;
use crate::position::Position;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a comment whose opening `/` (at `start`) was just consumed and
    /// whose second character is the next one in the cursor.
    pub(crate) fn skip_comment(&mut self, start: Position) -> Result<()> {
        self.flush()?;

        if self.cursor.eat('/') {
            self.skip_line_comment();
        } else {
            self.cursor.bump();
            self.skip_block_comment(start)?;
        }

        self.state = ScanState::Empty;
        Ok(())
    }

    /// Skips a line comment. Ends quietly at end of input.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.cursor.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Skips a block comment body through its closing `*/`.
    fn skip_block_comment(&mut self, start: Position) -> Result<()> {
        while let Some(c) = self.cursor.bump() {
            if c == '*' && self.cursor.eat('/') {
                return Ok(());
            }
        }

        Err(LexError::UnterminatedComment {
            line: start.line,
            column: start.column,
        })
    }
}
