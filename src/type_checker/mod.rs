//! Type checking and semantic analysis module.
//!
//! This module holds the semantic utilities that sit beside the parser:
//!
//! - `SymbolTable` tracks declared variables, their types and initialization
//! - `TypeChecker` answers assignment and operator compatibility questions
//! - `analysis` is an optional pass that walks a parsed program with both
//!
//! None of this runs during `parse`; callers invoke it explicitly.

pub mod analysis;
pub mod symbol_table;
pub mod type_checker;
pub mod types;
