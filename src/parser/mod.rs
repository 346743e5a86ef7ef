//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that transforms a
//! stream of tokens into a `Program`. It handles:
//!
//! - Statement parsing (assignments terminated by `;`)
//! - Expression parsing (a flat, left-associative operator chain)
//! - Terms (integers, variables, parenthesised expressions)
//!
//! Parsing stops at the first error; there is no recovery.

pub mod expr;
pub mod parser;
pub mod stmt;
