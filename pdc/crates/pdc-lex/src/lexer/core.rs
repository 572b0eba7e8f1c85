//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the character-class state
//! machine that groups characters into lexemes.

use std::mem;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::lexer::classify::classify;
use crate::lexer::state::{is_bracket, is_persistent_separator, is_quote, CharClass, ScanState};
use crate::position::Position;
use crate::token::Token;

/// Lexer for the Project D programming language.
///
/// A lexer owns all of its working state (pending lexeme, accumulation
/// state, output) and is consumed by [`tokenize`](Lexer::tokenize), so each
/// scan starts from scratch. Independent lexers can run on different threads
/// without any coordination.
///
/// # Example
///
/// ```
/// use pdc_lex::{Keyword, Lexer, TokenKind};
///
/// let tokens = Lexer::new("var x := 1").tokenize().unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Var));
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// What kind of lexeme `buffer` is accumulating.
    pub(crate) state: ScanState,

    /// The lexeme in progress.
    buffer: String,

    /// Position of the first character in `buffer`.
    lexeme_start: Position,

    /// Tokens committed so far, in source order.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    /// Creates a new lexer with the given configuration.
    pub fn with_config(source: &'a str, config: &LexerConfig) -> Self {
        Self {
            cursor: Cursor::with_tab_width(source, config.tab_width),
            state: ScanState::Empty,
            buffer: String::new(),
            lexeme_start: Position::start(),
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source and returns its tokens in source order.
    ///
    /// Stops at the first lexical error; no partial token stream is returned.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        info!(
            bytes = self.cursor.remaining().len(),
            "starting lexical analysis"
        );
        let started = Instant::now();

        loop {
            let start = self.cursor.position();
            let Some(c) = self.cursor.bump() else {
                break;
            };
            self.dispatch(c, start)?;
        }
        self.flush()?;

        info!(
            tokens = self.tokens.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "lexical analysis finished"
        );
        Ok(self.tokens)
    }

    /// Routes one consumed character. Brackets, quotes, comment openers and
    /// periods are handled before the generic state machine.
    fn dispatch(&mut self, c: char, start: Position) -> Result<()> {
        match c {
            c if is_bracket(c) => self.lex_bracket(c, start),
            c if is_quote(c) => self.lex_quoted(c, start),
            '/' if matches!(self.cursor.peek(), Some('/' | '*')) => self.skip_comment(start),
            '.' => self.lex_period(start),
            c => self.step(c, start),
        }
    }

    /// One transition of the character-class state machine.
    fn step(&mut self, c: char, start: Position) -> Result<()> {
        let next = CharClass::of(c).state();

        if next == Some(self.state) && self.state != ScanState::Separator {
            self.push(c, start);
            return Ok(());
        }

        self.flush()?;
        let Some(next) = next else {
            return Err(LexError::UnrecognizedCharacter {
                line: start.line,
                column: start.column,
                character: c,
            });
        };

        self.state = next;
        if matches!(next, ScanState::Alphanumeric | ScanState::OperatorSymbol)
            || is_persistent_separator(c)
        {
            self.push(c, start);
        }
        Ok(())
    }

    fn lex_bracket(&mut self, c: char, start: Position) -> Result<()> {
        self.flush()?;
        let mut buf = [0; 4];
        self.commit(c.encode_utf8(&mut buf), start)?;
        self.state = ScanState::Empty;
        Ok(())
    }

    /// A period continues a number (`3.5`), forms the range operator (`..`),
    /// or is an ordinary separator.
    fn lex_period(&mut self, start: Position) -> Result<()> {
        let next = self.cursor.peek();

        if self.state == ScanState::Alphanumeric
            && is_digit_run(&self.buffer)
            && next.is_some_and(|n| n.is_ascii_digit())
        {
            self.buffer.push('.');
            return Ok(());
        }

        if next == Some('.') {
            self.flush()?;
            self.cursor.bump();
            self.commit("..", start)?;
            self.state = ScanState::Empty;
            return Ok(());
        }

        self.step('.', start)
    }

    /// Appends `c` to the pending lexeme, starting a new one if needed.
    fn push(&mut self, c: char, at: Position) {
        if self.buffer.is_empty() {
            self.lexeme_start = at;
        }
        self.buffer.push(c);
    }

    /// Classifies and commits the pending lexeme, if any.
    pub(crate) fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let lexeme = mem::take(&mut self.buffer);
        self.commit(&lexeme, self.lexeme_start)
    }

    /// Classifies a complete lexeme and appends the resulting token.
    pub(crate) fn commit(&mut self, lexeme: &str, at: Position) -> Result<()> {
        let token = classify(lexeme, at)?;
        debug!(line = token.line, column = token.column, kind = %token.kind, "token");
        self.tokens.push(token);
        Ok(())
    }

    /// Returns the position of the next character to be consumed.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }
}

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
