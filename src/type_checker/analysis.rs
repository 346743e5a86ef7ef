//! Semantic pass over a parsed [`Program`].
//!
//! Runs separately from parsing. Each assignment either declares its target
//! with the type of its value or, if the target already exists, must be
//! assignment-compatible with it. Variables must be assigned before they are
//! read.

use tracing::{debug, trace};

use crate::{
    ast::{
        expressions::{Expr, TermValue},
        statements::{AssignmentStmt, Program},
    },
    errors::errors::{Error, ErrorImpl, SymbolError},
    Position,
};

use super::{symbol_table::SymbolTable, type_checker::TypeChecker, types::ValueType};

/// Analyses `program` against an empty symbol table.
pub fn analyze(program: &Program) -> Result<SymbolTable, Error> {
    analyze_with(SymbolTable::new(), program)
}

/// Analyses `program` starting from `table`, so callers can seed
/// declarations the language itself cannot express (FLOAT and CHAR
/// variables). Returns the table as it stands after the last statement.
pub fn analyze_with(mut table: SymbolTable, program: &Program) -> Result<SymbolTable, Error> {
    for stmt in &program.body {
        if let Err(error) = analyze_assignment(&mut table, stmt) {
            debug!(error = %error, "semantic analysis failed");
            return Err(error);
        }
    }

    trace!(symbols = table.len(), "analysed program");
    Ok(table)
}

fn analyze_assignment(table: &mut SymbolTable, stmt: &AssignmentStmt) -> Result<(), Error> {
    let position = &stmt.span.start;
    let value_type = type_of_expr(table, &stmt.value)?;

    if table.contains(&stmt.target) {
        let target_type = table
            .lookup(&stmt.target)
            .map_err(|error| symbol_error(error, position))?;

        if !TypeChecker::check_assignment(target_type, value_type) {
            return Err(Error::new(
                ErrorImpl::TypeMatchError {
                    expected: target_type,
                    received: value_type,
                },
                position.clone(),
            ));
        }
    } else {
        table
            .add(&stmt.target, value_type)
            .map_err(|error| symbol_error(error, position))?;
    }

    table
        .set_initialized(&stmt.target)
        .map_err(|error| symbol_error(error, position))
}

/// Infers the type of `expr`, checking every operation on the way up.
pub fn type_of_expr(table: &SymbolTable, expr: &Expr) -> Result<ValueType, Error> {
    match expr {
        Expr::Term(term) => match &term.value {
            TermValue::Integer(_) => Ok(ValueType::Integer),
            TermValue::Variable(name) => {
                let position = &term.span.start;
                let ty = table
                    .lookup(name)
                    .map_err(|error| symbol_error(error, position))?;

                let initialized = table
                    .is_initialized(name)
                    .map_err(|error| symbol_error(error, position))?;
                if !initialized {
                    return Err(Error::new(
                        ErrorImpl::UninitializedVariable {
                            variable: name.clone(),
                        },
                        position.clone(),
                    ));
                }

                Ok(ty)
            }
        },
        Expr::Binary(binary) => {
            let left = type_of_expr(table, &binary.left)?;
            let right = type_of_expr(table, &binary.right)?;
            let operator = binary.operator.symbol();

            let incompatible = || {
                Error::new(
                    ErrorImpl::IncompatibleOperation {
                        left,
                        operator,
                        right,
                    },
                    binary.span.start.clone(),
                )
            };

            if !TypeChecker::check_op(left, operator, right) {
                return Err(incompatible());
            }

            TypeChecker::result_type_of_op(left, operator, right).ok_or_else(incompatible)
        }
    }
}

fn symbol_error(error: SymbolError, position: &Position) -> Error {
    Error::new(error.into(), position.clone())
}
