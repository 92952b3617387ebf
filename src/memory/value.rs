//! Runtime value representation
//!
//! This module defines the [`Value`] enum, the dynamically tagged runtime value
//! produced by the expression evaluator and stored in variable bindings.
//!
//! # Value Types
//!
//! - [`Value::Number`]: double-precision number
//! - [`Value::Str`]: string with its delimiters stripped
//! - [`Value::Bool`]: `true` / `false`
//! - [`Value::Null`]: the `null` literal
//! - [`Value::Undefined`]: the `undefined` literal, also the value of `let x;`
//! - [`Value::Structured`]: array or object literal that parsed as JSON
//! - [`Value::Symbolic`]: raw text the evaluator could not interpret
//! - [`Value::Unresolved`]: reference to an unbound identifier
//!
//! # Equality
//!
//! `PartialEq` on [`Value`] is *same-value* equality: identical tags and
//! identical contents, with `NaN` equal to itself. It is what change detection
//! in snapshots uses. The language-level `===` and `==` operators live in
//! [`crate::interpreter::ops`].

use serde::Serialize;
use std::fmt;

/// Runtime values in the simulator
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    #[serde(rename = "number")]
    Number(f64),
    #[serde(rename = "string")]
    Str(String),
    #[serde(rename = "boolean")]
    Bool(bool),
    #[serde(rename = "null")]
    Null,
    #[default]
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "structured")]
    Structured(serde_json::Value),
    #[serde(rename = "symbolic")]
    Symbolic(String),
    #[serde(rename = "unresolved")]
    Unresolved(String), // Identifier name
}

/// Runtime tag of a [`Value`], used as the declared type of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Number,
    String,
    Boolean,
    Null,
    Undefined,
    Array,
    Object,
    Symbolic,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Symbolic => "symbolic",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Runtime tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::Structured(serde_json::Value::Array(_)) => ValueKind::Array,
            Value::Structured(_) => ValueKind::Object,
            Value::Symbolic(_) | Value::Unresolved(_) => ValueKind::Symbolic,
        }
    }

    /// Get the number, returns None if not a Number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of a string or symbolic value
    pub fn string_like(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Symbolic(s) => Some(s),
            _ => None,
        }
    }

    /// `null`, `undefined`, and unbound identifiers
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined | Value::Unresolved(_))
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) | Value::Symbolic(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Null | Value::Undefined | Value::Unresolved(_) => false,
            Value::Structured(_) => true,
        }
    }

    /// Numeric conversion used by ordering comparisons and loose equality
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(true) => 1.0,
            Value::Bool(false) | Value::Null => 0.0,
            Value::Str(s) | Value::Symbolic(s) => string_to_number(s),
            Value::Undefined | Value::Unresolved(_) | Value::Structured(_) => f64::NAN,
        }
    }

    /// Literal-style rendering used in history descriptions.
    ///
    /// Strings are quoted, `undefined` stays bare, non-finite numbers render
    /// as `null` the way a JSON serializer would.
    pub fn repr(&self) -> String {
        match self {
            Value::Number(n) if !n.is_finite() => "null".to_string(),
            Value::Str(s) | Value::Symbolic(s) => serde_json::Value::String(s.clone()).to_string(),
            Value::Unresolved(_) => serde_json::Value::String(self.to_string()).to_string(),
            _ => self.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::Structured(a), Value::Structured(b)) => a == b,
            (Value::Symbolic(a), Value::Symbolic(b)) => a == b,
            (Value::Unresolved(a), Value::Unresolved(b)) => a == b,
            _ => false,
        }
    }
}

/// Output form of a value, as printed to the console
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) | Value::Symbolic(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Structured(json) => write!(f, "{}", json),
            Value::Unresolved(name) => write!(f, "<undefined: {}>", name),
        }
    }
}

/// Format a number the way the snippet language prints it
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // Covers -0
        "0".to_string()
    } else if !(1e-6..1e21).contains(&n.abs()) {
        exponent_form(n)
    } else if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// `1e-7`, `1.5e+21`: shortest digits with an always-signed exponent
fn exponent_form(n: f64) -> String {
    let text = format!("{:e}", n);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Parse text as a number: blank is 0, anything unparsable is NaN
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}
