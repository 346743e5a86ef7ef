use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// The value types a variable can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
    Char,
}

impl ValueType {
    /// Type of a literal token, `None` for anything that is not a literal.
    pub fn of_literal(kind: TokenKind) -> Option<ValueType> {
        match kind {
            TokenKind::Integer => Some(ValueType::Integer),
            TokenKind::Float => Some(ValueType::Float),
            TokenKind::Char => Some(ValueType::Char),
            _ => None,
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Integer => write!(f, "INTEGER"),
            ValueType::Float => write!(f, "FLOAT"),
            ValueType::Char => write!(f, "CHAR"),
        }
    }
}
