//! Token type definitions.
//!
//! A [`Token`] pairs the raw lexeme with the position of its first character
//! and its classification. Classification is a closed tagged union: each
//! family of fixed symbols (separators, operators, keywords) is an enum with
//! an exact-match symbol table, literals carry their decoded value, and
//! identifiers carry their name.

use std::fmt;

use serde::Serialize;

use crate::position::Position;

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// The exact source text the token was built from.
    pub lexeme: String,
    /// Line of the lexeme's first character (1-based).
    pub line: u32,
    /// Column of the lexeme's first character (1-based).
    pub column: u32,
    /// Classification of the lexeme.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token starting at `at`.
    pub fn new(lexeme: impl Into<String>, at: Position, kind: TokenKind) -> Self {
        Self {
            lexeme: lexeme.into(),
            line: at.line,
            column: at.column,
            kind,
        }
    }

    /// Position of the token's first character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.line, self.column, self.kind, self.lexeme
        )
    }
}

/// Syntactic family of a token, with the exact matched variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TokenKind {
    /// Punctuation, brackets and line breaks.
    Separator(Separator),
    /// Symbolic and word operators.
    Operator(Operator),
    /// Reserved words.
    Keyword(Keyword),
    /// Constant values.
    Literal(Literal),
    /// User-defined names.
    Identifier {
        /// The identifier's spelling.
        name: String,
    },
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Separator(s) => write!(f, "Separator.{:?}", s),
            TokenKind::Operator(o) => write!(f, "Operator.{:?}", o),
            TokenKind::Keyword(k) => write!(f, "Keyword.{:?}", k),
            TokenKind::Literal(l) => write!(f, "Literal.{}", l.variant_name()),
            TokenKind::Identifier { .. } => f.write_str("Identifier"),
        }
    }
}

// ============================================================================
// Separators
// ============================================================================

/// Separator symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Separator {
    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    CurlyBraceOpen,
    CurlyBraceClose,
    Semicolon,
    Comma,
    Period,
    Whitespace,
    Tab,
    NewLine,
    WindowsNewLine,
}

impl Separator {
    /// Every separator, in declaration order.
    pub const ALL: [Separator; 13] = [
        Separator::ParenOpen,
        Separator::ParenClose,
        Separator::BracketOpen,
        Separator::BracketClose,
        Separator::CurlyBraceOpen,
        Separator::CurlyBraceClose,
        Separator::Semicolon,
        Separator::Comma,
        Separator::Period,
        Separator::Whitespace,
        Separator::Tab,
        Separator::NewLine,
        Separator::WindowsNewLine,
    ];

    /// The source spelling of this separator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Separator::ParenOpen => "(",
            Separator::ParenClose => ")",
            Separator::BracketOpen => "[",
            Separator::BracketClose => "]",
            Separator::CurlyBraceOpen => "{",
            Separator::CurlyBraceClose => "}",
            Separator::Semicolon => ";",
            Separator::Comma => ",",
            Separator::Period => ".",
            Separator::Whitespace => " ",
            Separator::Tab => "\t",
            Separator::NewLine => "\n",
            Separator::WindowsNewLine => "\r",
        }
    }

    /// Looks up a separator by its exact spelling.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "(" => Some(Separator::ParenOpen),
            ")" => Some(Separator::ParenClose),
            "[" => Some(Separator::BracketOpen),
            "]" => Some(Separator::BracketClose),
            "{" => Some(Separator::CurlyBraceOpen),
            "}" => Some(Separator::CurlyBraceClose),
            ";" => Some(Separator::Semicolon),
            "," => Some(Separator::Comma),
            "." => Some(Separator::Period),
            " " => Some(Separator::Whitespace),
            "\t" => Some(Separator::Tab),
            "\n" => Some(Separator::NewLine),
            "\r" => Some(Separator::WindowsNewLine),
            _ => None,
        }
    }

    /// Returns true if `symbol` belongs to the separator set.
    pub fn is_member(symbol: &str) -> bool {
        Self::ALL.iter().any(|s| s.as_str() == symbol)
    }

    /// Whether this separator becomes a token of its own. Whitespace, tabs
    /// and carriage returns only delimit other tokens.
    pub const fn is_persistent(self) -> bool {
        !matches!(
            self,
            Separator::Whitespace | Separator::Tab | Separator::WindowsNewLine
        )
    }
}

// ============================================================================
// Operators
// ============================================================================

/// Operator symbols, including the word-spelled logical operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// `:=`
    Assign,
    Not,
    Or,
    And,
    Xor,
    Is,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    /// `/=`
    Neq,
    Plus,
    Minus,
    Mul,
    Div,
    /// `=>`
    Arrow,
    /// `..`
    Range,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 18] = [
        Operator::Assign,
        Operator::Not,
        Operator::Or,
        Operator::And,
        Operator::Xor,
        Operator::Is,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::Eq,
        Operator::Neq,
        Operator::Plus,
        Operator::Minus,
        Operator::Mul,
        Operator::Div,
        Operator::Arrow,
        Operator::Range,
    ];

    /// The source spelling of this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Assign => ":=",
            Operator::Not => "not",
            Operator::Or => "or",
            Operator::And => "and",
            Operator::Xor => "xor",
            Operator::Is => "is",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Eq => "=",
            Operator::Neq => "/=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Arrow => "=>",
            Operator::Range => "..",
        }
    }

    /// Looks up an operator by its exact spelling.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            ":=" => Some(Operator::Assign),
            "not" => Some(Operator::Not),
            "or" => Some(Operator::Or),
            "and" => Some(Operator::And),
            "xor" => Some(Operator::Xor),
            "is" => Some(Operator::Is),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Le),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Ge),
            "=" => Some(Operator::Eq),
            "/=" => Some(Operator::Neq),
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "=>" => Some(Operator::Arrow),
            ".." => Some(Operator::Range),
            _ => None,
        }
    }

    /// Returns true if `symbol` belongs to the operator set.
    pub fn is_member(symbol: &str) -> bool {
        Self::ALL.iter().any(|o| o.as_str() == symbol)
    }
}

// ============================================================================
// Keywords
// ============================================================================

/// Reserved words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Var,
    True,
    False,
    /// Shadowed by [`Operator::Is`]; never produced by classification.
    Is,
    End,
    If,
    Then,
    Else,
    For,
    While,
    In,
    Loop,
    Print,
    Return,
    Int,
    Real,
    Bool,
    String,
    /// Shadowed by [`Literal::Empty`]; never produced by classification.
    Empty,
    Func,
    Array,
    Tuple,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 22] = [
        Keyword::Var,
        Keyword::True,
        Keyword::False,
        Keyword::Is,
        Keyword::End,
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::For,
        Keyword::While,
        Keyword::In,
        Keyword::Loop,
        Keyword::Print,
        Keyword::Return,
        Keyword::Int,
        Keyword::Real,
        Keyword::Bool,
        Keyword::String,
        Keyword::Empty,
        Keyword::Func,
        Keyword::Array,
        Keyword::Tuple,
    ];

    /// The source spelling of this keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::Is => "is",
            Keyword::End => "end",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::In => "in",
            Keyword::Loop => "loop",
            Keyword::Print => "print",
            Keyword::Return => "return",
            Keyword::Int => "int",
            Keyword::Real => "real",
            Keyword::Bool => "bool",
            Keyword::String => "string",
            Keyword::Empty => "empty",
            Keyword::Func => "func",
            Keyword::Array => "array",
            Keyword::Tuple => "tuple",
        }
    }

    /// Looks up a keyword by its exact spelling.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "var" => Some(Keyword::Var),
            "true" => Some(Keyword::True),
            "false" => Some(Keyword::False),
            "is" => Some(Keyword::Is),
            "end" => Some(Keyword::End),
            "if" => Some(Keyword::If),
            "then" => Some(Keyword::Then),
            "else" => Some(Keyword::Else),
            "for" => Some(Keyword::For),
            "while" => Some(Keyword::While),
            "in" => Some(Keyword::In),
            "loop" => Some(Keyword::Loop),
            "print" => Some(Keyword::Print),
            "return" => Some(Keyword::Return),
            "int" => Some(Keyword::Int),
            "real" => Some(Keyword::Real),
            "bool" => Some(Keyword::Bool),
            "string" => Some(Keyword::String),
            "empty" => Some(Keyword::Empty),
            "func" => Some(Keyword::Func),
            "array" => Some(Keyword::Array),
            "tuple" => Some(Keyword::Tuple),
            _ => None,
        }
    }

    /// Returns true if `word` belongs to the reserved-word set.
    pub fn is_member(word: &str) -> bool {
        Self::ALL.iter().any(|k| k.as_str() == word)
    }
}

// ============================================================================
// Literals
// ============================================================================

/// The spelling of the empty value.
pub const EMPTY_LITERAL: &str = "empty";

/// Constant values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    /// Text between the quotes, without escape decoding.
    String(String),
    Empty,
}

impl Literal {
    fn variant_name(&self) -> &'static str {
        match self {
            Literal::Integer(_) => "Integer",
            Literal::Real(_) => "Real",
            Literal::String(_) => "String",
            Literal::Empty => "Empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_table_agrees() {
        for sep in Separator::ALL {
            assert_eq!(Separator::from_symbol(sep.as_str()), Some(sep));
            assert!(Separator::is_member(sep.as_str()));
        }
        assert!(!Separator::is_member(".."));
    }

    #[test]
    fn test_operator_table_agrees() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.as_str()), Some(op));
            assert!(Operator::is_member(op.as_str()));
        }
        assert!(!Operator::is_member(":"));
        assert!(!Operator::is_member("=="));
    }

    #[test]
    fn test_keyword_table_agrees() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_word(kw.as_str()), Some(kw));
            assert!(Keyword::is_member(kw.as_str()));
        }
        assert!(!Keyword::is_member("Var"));
    }

    #[test]
    fn test_persistent_separators() {
        assert!(Separator::NewLine.is_persistent());
        assert!(Separator::Semicolon.is_persistent());
        assert!(Separator::ParenOpen.is_persistent());
        assert!(!Separator::Whitespace.is_persistent());
        assert!(!Separator::Tab.is_persistent());
        assert!(!Separator::WindowsNewLine.is_persistent());
    }

    #[test]
    fn test_is_spelled_in_both_sets() {
        assert!(Operator::is_member("is"));
        assert!(Keyword::is_member("is"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            TokenKind::Operator(Operator::Assign).to_string(),
            "Operator.Assign"
        );
        assert_eq!(
            TokenKind::Literal(Literal::Real(1.5)).to_string(),
            "Literal.Real"
        );
        assert_eq!(
            TokenKind::Identifier {
                name: "x".to_string()
            }
            .to_string(),
            "Identifier"
        );
    }

    #[test]
    fn test_token_display_escapes_newline() {
        let token = Token::new(
            "\n",
            Position::new(2, 7),
            TokenKind::Separator(Separator::NewLine),
        );
        assert_eq!(token.to_string(), "2:7 Separator.NewLine \"\\n\"");
        assert_eq!(token.position(), Position::new(2, 7));
    }

    #[test]
    fn test_token_serializes_with_kind() {
        let token = Token::new("var", Position::start(), TokenKind::Keyword(Keyword::Var));
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["lexeme"], "var");
        assert_eq!(json["line"], 1);
        assert_eq!(json["column"], 1);
        assert_eq!(json["kind"]["Keyword"], "Var");
    }
}
