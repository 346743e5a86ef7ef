use std::collections::HashMap;

use crate::errors::errors::SymbolError;

use super::types::ValueType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub ty: ValueType,
    pub initialized: bool,
}

/// Declared variables, their types and whether they have been assigned.
///
/// A name can be declared once. Its type may be replaced with `update`, and
/// once marked initialized it stays initialized.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    variable_lookup: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn add(&mut self, identifier: &str, ty: ValueType) -> Result<(), SymbolError> {
        if self.variable_lookup.contains_key(identifier) {
            return Err(SymbolError::DuplicateDeclaration {
                variable: String::from(identifier),
            });
        }

        self.variable_lookup.insert(
            String::from(identifier),
            Symbol {
                ty,
                initialized: false,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, identifier: &str) -> Result<ValueType, SymbolError> {
        self.get(identifier).map(|symbol| symbol.ty)
    }

    pub fn is_initialized(&self, identifier: &str) -> Result<bool, SymbolError> {
        self.get(identifier).map(|symbol| symbol.initialized)
    }

    pub fn set_initialized(&mut self, identifier: &str) -> Result<(), SymbolError> {
        self.get_mut(identifier)?.initialized = true;
        Ok(())
    }

    /// Replaces the declared type. This is re-typing, not an assignment check.
    pub fn update(&mut self, identifier: &str, new_type: ValueType) -> Result<(), SymbolError> {
        self.get_mut(identifier)?.ty = new_type;
        Ok(())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.variable_lookup.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    fn get(&self, identifier: &str) -> Result<&Symbol, SymbolError> {
        self.variable_lookup
            .get(identifier)
            .ok_or_else(|| undeclared(identifier))
    }

    fn get_mut(&mut self, identifier: &str) -> Result<&mut Symbol, SymbolError> {
        self.variable_lookup
            .get_mut(identifier)
            .ok_or_else(|| undeclared(identifier))
    }
}

fn undeclared(identifier: &str) -> SymbolError {
    SymbolError::UndeclaredVariable {
        variable: String::from(identifier),
    }
}
