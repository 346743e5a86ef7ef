use std::fmt::Display;

use crate::Span;

/// Arithmetic operator. All four bind equally and associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Term(TermExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(binary) => &binary.span,
            Expr::Term(term) => &term.span,
        }
    }
}

/// Binary Expression
/// `left operator right`, rendered as an "Expression" node.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Operator,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermValue {
    Integer(i64),
    Variable(String),
}

impl Display for TermValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermValue::Integer(value) => write!(f, "{}", value),
            TermValue::Variable(name) => write!(f, "{}", name),
        }
    }
}

/// Term Expression
/// A leaf: an integer literal or a variable reference.
#[derive(Debug, Clone, PartialEq)]
pub struct TermExpr {
    pub value: TermValue,
    pub span: Span,
}
