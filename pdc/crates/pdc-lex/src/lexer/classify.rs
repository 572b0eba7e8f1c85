//! Lexeme classification.
//!
//! Turns a finished lexeme into a [`Token`]. The families are tried in a
//! fixed order and the first match wins:
//!
//! 1. separators (exact match)
//! 2. operators (exact match, including `not`, `or`, `and`, `xor`, `is`)
//! 3. keywords (exact match)
//! 4. literals (`empty`, quoted strings, numbers)
//! 5. identifiers
//!
//! Because operators come before keywords, `is` is always [`Operator::Is`].
//! The word `empty` is left to the literal stage and is always
//! [`Literal::Empty`].

use crate::error::{LexError, Result};
use crate::lexer::identifier::is_identifier;
use crate::lexer::number::{looks_numeric, parse_number};
use crate::position::Position;
use crate::token::{Keyword, Literal, Operator, Separator, Token, TokenKind, EMPTY_LITERAL};

/// Classifies `lexeme`, which starts at `at`.
///
/// # Example
///
/// ```
/// use pdc_lex::{classify, Operator, Position, TokenKind};
///
/// let token = classify(":=", Position::new(2, 3)).unwrap();
/// assert_eq!(token.kind, TokenKind::Operator(Operator::Assign));
/// assert_eq!((token.line, token.column), (2, 3));
/// ```
pub fn classify(lexeme: &str, at: Position) -> Result<Token> {
    let kind = if Separator::is_member(lexeme) {
        TokenKind::Separator(separator(lexeme, at)?)
    } else if Operator::is_member(lexeme) {
        TokenKind::Operator(operator(lexeme, at)?)
    } else if Keyword::is_member(lexeme) && lexeme != EMPTY_LITERAL {
        TokenKind::Keyword(keyword(lexeme, at)?)
    } else if let Some(literal) = literal(lexeme, at)? {
        TokenKind::Literal(literal)
    } else if is_identifier(lexeme) {
        TokenKind::Identifier {
            name: lexeme.to_string(),
        }
    } else {
        return Err(LexError::malformed_identifier(lexeme, at));
    };

    Ok(Token::new(lexeme, at, kind))
}

/// Converts a separator spelling, failing with `UnknownSeparator` for
/// anything outside the set.
pub fn separator(lexeme: &str, at: Position) -> Result<Separator> {
    Separator::from_symbol(lexeme).ok_or_else(|| LexError::UnknownSeparator {
        line: at.line,
        column: at.column,
        lexeme: lexeme.to_string(),
    })
}

/// Converts an operator spelling, failing with `UnknownOperator` for
/// anything outside the set.
pub fn operator(lexeme: &str, at: Position) -> Result<Operator> {
    Operator::from_symbol(lexeme).ok_or_else(|| LexError::UnknownOperator {
        line: at.line,
        column: at.column,
        lexeme: lexeme.to_string(),
    })
}

/// Converts a keyword spelling, failing with `UnknownKeyword` for anything
/// outside the set.
pub fn keyword(lexeme: &str, at: Position) -> Result<Keyword> {
    Keyword::from_word(lexeme).ok_or_else(|| LexError::UnknownKeyword {
        line: at.line,
        column: at.column,
        lexeme: lexeme.to_string(),
    })
}

/// Returns the literal the lexeme spells, `None` if it is not literal-shaped,
/// or `MalformedLiteral` if it starts like a number but is not one.
fn literal(lexeme: &str, at: Position) -> Result<Option<Literal>> {
    if lexeme == EMPTY_LITERAL {
        return Ok(Some(Literal::Empty));
    }
    if let Some(text) = quoted_text(lexeme) {
        return Ok(Some(Literal::String(text.to_string())));
    }
    if looks_numeric(lexeme) {
        return parse_number(lexeme)
            .map(Some)
            .ok_or_else(|| LexError::malformed_literal(lexeme, at));
    }
    Ok(None)
}

/// Text between matching `"`/`"` or `'`/`'` delimiters.
fn quoted_text(lexeme: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        lexeme
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}
