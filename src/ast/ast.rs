use std::fmt::Display;

use super::{
    expressions::{BinaryExpr, Expr, TermExpr},
    statements::{AssignmentStmt, Program},
};

/// Node Kinds
///
/// The names every syntactic construct is reported under.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    Program,
    AssignmentStatement,
    Expression,
    Term,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Node
///
/// A borrowed, uniform view over any tree node: a kind, an optional value and
/// ordered children. Useful for generic walks and for printing; the typed
/// structs remain the source of truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Program(&'a Program),
    Assignment(&'a AssignmentStmt),
    Expression(&'a BinaryExpr),
    Term(&'a TermExpr),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::Assignment(_) => NodeKind::AssignmentStatement,
            Node::Expression(_) => NodeKind::Expression,
            Node::Term(_) => NodeKind::Term,
        }
    }

    /// Variable name for assignments, operator for expressions, literal or
    /// name for terms.
    pub fn value(&self) -> Option<String> {
        match self {
            Node::Program(_) => None,
            Node::Assignment(stmt) => Some(stmt.target.clone()),
            Node::Expression(binary) => Some(binary.operator.to_string()),
            Node::Term(term) => Some(term.value.to_string()),
        }
    }

    pub fn children(&self) -> Vec<Node<'a>> {
        match self {
            Node::Program(program) => program.body.iter().map(Node::Assignment).collect(),
            Node::Assignment(stmt) => vec![Node::from(&stmt.value)],
            Node::Expression(binary) => {
                vec![Node::from(binary.left.as_ref()), Node::from(binary.right.as_ref())]
            }
            Node::Term(_) => vec![],
        }
    }

    fn write_tree(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let value = self.value().unwrap_or_else(|| String::from("None"));
        writeln!(f, "{}{}: {}", "\t".repeat(level), self.kind(), value)?;

        for child in self.children() {
            child.write_tree(f, level + 1)?;
        }

        Ok(())
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Binary(binary) => Node::Expression(binary),
            Expr::Term(term) => Node::Term(term),
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

// One line per node, `kind: value`, indented by depth with tabs.
impl Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_tree(f, 0)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Node::Program(self))
    }
}

impl Program {
    pub fn as_node(&self) -> Node<'_> {
        Node::Program(self)
    }
}
