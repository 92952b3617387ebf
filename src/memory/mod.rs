//! Variable environment for the simulator
//!
//! This module provides the core state abstractions:
//! - [`value`]: Runtime value representation (number, string, boolean, structured, symbolic)
//! - [`Environment`]: name → [`Binding`] mapping owned by the execution state
//!
//! Names are unique per environment and the last write wins. Bindings are kept
//! in first-declaration order so the variables pane stays stable between steps.

pub mod value;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use value::{Value, ValueKind};

/// A named variable and the runtime tag of its value at the last write
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub name: String,
    pub value: Value,
    pub declared_type: ValueKind,
    /// Declared with `const`
    pub constant: bool,
}

/// Mapping from variable name to its current binding
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: IndexMap<String, Binding, FxBuildHasher>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Current value of `name`, if bound
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|binding| &binding.value)
    }

    /// Numeric value of `name`, if bound to a number
    pub fn number_of(&self, name: &str) -> Option<f64> {
        self.value_of(name).and_then(Value::as_number)
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.bindings.get(name).is_some_and(|binding| binding.constant)
    }

    /// Write a binding, returning the one it replaced
    pub fn set(&mut self, name: &str, value: Value, constant: bool) -> Option<Binding> {
        let binding = Binding {
            name: name.to_string(),
            declared_type: value.kind(),
            value,
            constant,
        };
        self.bindings.insert(name.to_string(), binding)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut env = Environment::new();
        env.set("x", Value::Number(1.0), false);
        let previous = env.set("x", Value::Str("one".into()), false);

        assert_eq!(env.len(), 1);
        assert_eq!(previous.map(|b| b.value), Some(Value::Number(1.0)));
        assert_eq!(env.get("x").map(|b| b.declared_type), Some(ValueKind::String));
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let mut env = Environment::new();
        env.set("b", Value::Null, false);
        env.set("a", Value::Null, true);
        env.set("b", Value::Bool(true), false);

        let names: Vec<&str> = env.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(env.is_constant("a"));
        assert!(!env.is_constant("b"));
    }
}
