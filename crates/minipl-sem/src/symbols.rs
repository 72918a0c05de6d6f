//! The symbol table.
//!
//! A flat, global name-to-binding map; Mini-PL has no nested scopes. The
//! table only grows, and every name is unique. Insertion order is preserved,
//! which keeps diagnostics and debug output deterministic.

use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use thiserror::Error;

use crate::value::Value;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// A stored binding: the current value plus the loop-constant flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub value: Value,
    /// Set while the name is a running `for` loop's control variable.
    pub constant: bool,
}

/// Errors from symbol-table operations. The evaluator turns these into
/// user-facing diagnostics; the table itself never reports.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol is already declared")]
    Redeclared,
    #[error("symbol is not declared")]
    Undeclared,
    #[error("symbol is a loop control variable")]
    Constant,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: IndexMap<String, Binding, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new name. Uniqueness is checked before insertion, so a
    /// redeclaration leaves the existing binding untouched.
    pub fn insert(&mut self, name: &str, value: Value) -> Result<(), SymbolError> {
        if self.entries.contains_key(name) {
            return Err(SymbolError::Redeclared);
        }
        self.entries.insert(
            name.to_string(),
            Binding {
                value,
                constant: false,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.entries.get(name)
    }

    /// Overwrites a binding's value, refusing constant bindings.
    pub fn update(&mut self, name: &str, value: Value) -> Result<(), SymbolError> {
        let binding = self
            .entries
            .get_mut(name)
            .ok_or(SymbolError::Undeclared)?;
        if binding.constant {
            return Err(SymbolError::Constant);
        }
        binding.value = value;
        Ok(())
    }

    /// Overwrites a binding's value regardless of the constant flag. This is
    /// how the `for` machinery drives the loop counter.
    pub fn force_update(&mut self, name: &str, value: Value) {
        if let Some(binding) = self.entries.get_mut(name) {
            binding.value = value;
        }
    }

    /// Sets or clears the constant flag on a binding.
    pub fn set_constant(&mut self, name: &str, constant: bool) {
        if let Some(binding) = self.entries.get_mut(name) {
            binding.constant = constant;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
