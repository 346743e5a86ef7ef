use crate::Span;

use super::expressions::Expr;

/// Root of a parsed source: one assignment per statement, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<AssignmentStmt>,
    pub span: Span,
}

/// Assignment Statement
/// `target = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub target: String,
    pub value: Expr,
    pub span: Span,
}
