use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Variable,
    Integer,
    Float,
    Char,
    Operator,    // + - * /
    Assign,      // =
    Semicolon,   // ;
    Parenthesis, // ( )
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Variable => "VARIABLE",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Char => "CHAR",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Parenthesis => "PARENTHESIS",
        };
        write!(f, "{}", name)
    }
}

/// The payload carried by a token.
///
/// Variables and char literals carry text, numeric literals their parsed
/// value, and every punctuation token the single character it was lexed from.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Symbol(char),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{}", value),
            TokenValue::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

// Tokens compare by kind and value; where they were lexed is irrelevant.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.value)
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Token { kind, value, span }
    }

    /// True for a PARENTHESIS token holding exactly `symbol`.
    pub fn is_parenthesis(&self, symbol: char) -> bool {
        self.kind == TokenKind::Parenthesis && self.value == TokenValue::Symbol(symbol)
    }

    pub fn as_symbol(&self) -> Option<char> {
        match self.value {
            TokenValue::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }
}
