//! Numeric literal grammar.
//!
//! Accepted shape: `sign? digit+ ('.' digit+)?`. A decimal point makes the
//! literal `Real`, otherwise it is an `Integer` that must fit in `i64`.

use crate::token::Literal;

fn strip_sign(lexeme: &str) -> &str {
    lexeme.strip_prefix(&['+', '-'][..]).unwrap_or(lexeme)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Whether the lexeme starts like a number (a digit, optionally signed).
pub fn looks_numeric(lexeme: &str) -> bool {
    strip_sign(lexeme).starts_with(|c: char| c.is_ascii_digit())
}

/// Parses a numeric literal, or returns `None` if the lexeme does not match
/// the grammar or does not fit its type.
pub fn parse_number(lexeme: &str) -> Option<Literal> {
    let unsigned = strip_sign(lexeme);
    match unsigned.split_once('.') {
        None if is_digits(unsigned) => lexeme.parse().ok().map(Literal::Integer),
        Some((whole, fraction)) if is_digits(whole) && is_digits(fraction) => {
            lexeme.parse().ok().map(Literal::Real)
        },
        _ => None,
    }
}
