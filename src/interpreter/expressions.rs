//! Expression evaluation over raw text fragments
//!
//! The evaluator resolves a fragment without parsing it into a tree. Each
//! step of the resolution chain is tried in order and the first that applies
//! wins:
//!
//! 1. Quoted string literal
//! 2. Numeric literal
//! 3. `true` / `false` / `null` / `undefined`
//! 4. Bracket or brace literal (JSON, or symbolic text when it does not parse)
//! 5. Bare identifier (unbound names become [`Value::Unresolved`])
//! 6. Binary arithmetic `a OP b`
//! 7. Binary comparison `a OP b`
//! 8. The trimmed fragment as symbolic text
//!
//! Only one top-level split happens per level. Both sides of a split are
//! evaluated recursively through the same chain, so there is no grouping by
//! parentheses. Evaluation is a pure function of the fragment and the
//! environment and never fails.

use crate::interpreter::ops::{ArithmeticOp, ComparisonOp};
use crate::memory::value::Value;
use crate::memory::Environment;
use crate::parser::scan::{is_identifier, top_level};

/// Evaluate `fragment` against `env`
pub fn evaluate(fragment: &str, env: &Environment) -> Value {
    let text = fragment.trim();

    if let Some(s) = string_literal(text) {
        return Value::Str(s.to_string());
    }
    if let Some(n) = number_literal(text) {
        return Value::Number(n);
    }
    if let Some(value) = keyword_literal(text) {
        return value;
    }
    if let Some(value) = structured_literal(text) {
        return value;
    }
    if is_identifier(text) {
        return env
            .value_of(text)
            .cloned()
            .unwrap_or_else(|| Value::Unresolved(text.to_string()));
    }

    // Comparisons bind looser than arithmetic
    let comparison = split_comparison(text);
    if comparison.is_none() {
        if let Some(value) = evaluate_arithmetic(text, env) {
            return value;
        }
    }
    if let Some((left, op, right)) = comparison {
        let left = evaluate(left, env);
        let right = evaluate(right, env);
        return Value::Bool(op.apply(&left, &right));
    }

    Value::Symbolic(text.to_string())
}

/// Contents of a literal delimited by matching `"`, `'`, or backticks
fn string_literal(text: &str) -> Option<&str> {
    let quote = text.chars().next().filter(|c| matches!(c, '"' | '\'' | '`'))?;
    if text.len() < 2 || !text.ends_with(quote) {
        return None;
    }
    let inner = &text[1..text.len() - 1];

    // Reject `"a" + "b"`: the delimiter may only reappear escaped
    let mut escaped = false;
    for c in inner.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return None;
        }
    }
    if escaped {
        return None;
    }
    Some(inner)
}

/// Optionally signed integer or decimal
fn number_literal(text: &str) -> Option<f64> {
    let digits = text
        .strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !fraction.map_or(true, all_digits) {
        return None;
    }
    text.parse().ok()
}

fn keyword_literal(text: &str) -> Option<Value> {
    match text {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        "null" => Some(Value::Null),
        "undefined" => Some(Value::Undefined),
        _ => None,
    }
}

/// `[...]` or `{...}`: JSON when it parses, symbolic text otherwise
fn structured_literal(text: &str) -> Option<Value> {
    let delimited = (text.starts_with('[') && text.ends_with(']'))
        || (text.starts_with('{') && text.ends_with('}'));
    if !delimited {
        return None;
    }
    Some(match serde_json::from_str(text) {
        Ok(json) => Value::Structured(json),
        Err(_) => Value::Symbolic(text.to_string()),
    })
}

/// Left-most top-level comparison operator
pub(crate) fn split_comparison(text: &str) -> Option<(&str, ComparisonOp, &str)> {
    for (i, c) in top_level(text) {
        if !matches!(c, '=' | '!' | '<' | '>') {
            continue;
        }
        let rest = &text[i..];
        let Some(op) = ComparisonOp::ALL
            .into_iter()
            .find(|op| rest.starts_with(op.symbol()))
        else {
            continue;
        };
        let end = i + op.symbol().len();
        if matches!(op, ComparisonOp::Lt | ComparisonOp::Gt) {
            // `=>`, `<<`, `>>` are not comparisons
            let before = text[..i].chars().next_back();
            let after = text[end..].chars().next();
            if before == Some('=') || before == Some(c) || after == Some(c) {
                continue;
            }
        }
        return Some((&text[..i], op, &text[end..]));
    }
    None
}

/// Right-most top-level arithmetic operator of the loosest precedence
pub(crate) fn split_arithmetic(text: &str) -> Option<(&str, ArithmeticOp, &str)> {
    let mut additive = None;
    let mut multiplicative = None;
    let mut previous: Option<char> = None;

    for (i, c) in top_level(text) {
        if c.is_whitespace() {
            continue;
        }
        // Arrow function bodies are not operands
        if c == '=' && text[i..].starts_with("=>") {
            return None;
        }
        let op = ArithmeticOp::from_char(c);
        let before = text[..i].chars().next_back();
        let after = text[i + c.len_utf8()..].chars().next();

        if let Some(op) = op {
            let doubled = before == Some(c) || after == Some(c);
            let compound = after == Some('=');
            // A sign has no operand before it
            let prefix = previous.map_or(true, is_operator_char);
            if !doubled && !compound && !(op.is_additive() && prefix) {
                if op.is_additive() {
                    additive = Some((i, op));
                } else {
                    multiplicative = Some((i, op));
                }
            }
        }
        previous = Some(c);
    }

    let (i, op) = additive.or(multiplicative)?;
    let (left, right) = (&text[..i], &text[i + 1..]);
    if left.trim().is_empty() || right.trim().is_empty() {
        return None;
    }
    Some((left, op, right))
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | ',')
}

fn evaluate_arithmetic(text: &str, env: &Environment) -> Option<Value> {
    let (left, op, right) = split_arithmetic(text)?;
    let left = evaluate(left, env);
    let right = evaluate(right, env);

    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Some(Value::Number(op.apply(*a, *b))),
        _ if op == ArithmeticOp::Add => Some(Value::Str(format!("{}{}", left, right))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_literal_shapes() {
        assert_eq!(number_literal("42"), Some(42.0));
        assert_eq!(number_literal("-3.5"), Some(-3.5));
        assert_eq!(number_literal("+1"), Some(1.0));
        assert_eq!(number_literal("1."), None);
        assert_eq!(number_literal(".5"), None);
        assert_eq!(number_literal("1e5"), None);
        assert_eq!(number_literal("inf"), None);
    }

    #[test]
    fn test_string_literal_needs_one_literal() {
        assert_eq!(string_literal("\"hello\""), Some("hello"));
        assert_eq!(string_literal("'it\\'s'"), Some("it\\'s"));
        assert_eq!(string_literal("\"a\" + \"b\""), None);
        assert_eq!(string_literal("\"open"), None);
        assert_eq!(string_literal("\""), None);
    }

    #[test]
    fn test_split_arithmetic_precedence() {
        let (left, op, right) = split_arithmetic("a - b - c").unwrap();
        assert_eq!((left.trim(), op, right.trim()), ("a - b", ArithmeticOp::Sub, "c"));

        let (left, op, right) = split_arithmetic("a + b * c").unwrap();
        assert_eq!((left.trim(), op, right.trim()), ("a", ArithmeticOp::Add, "b * c"));

        let (left, op, right) = split_arithmetic("x * -2").unwrap();
        assert_eq!((left.trim(), op, right.trim()), ("x", ArithmeticOp::Mul, "-2"));
    }

    #[test]
    fn test_split_arithmetic_ignores_increments() {
        assert!(split_arithmetic("i++").is_none());
        assert!(split_arithmetic("i += 1").is_none());
        assert!(split_arithmetic("-5").is_none());
    }

    #[test]
    fn test_split_arithmetic_needs_both_operands() {
        assert!(split_arithmetic("5 +").is_none());
        assert!(split_arithmetic("* 2").is_none());
        assert!(split_arithmetic("(a, b) => a + b").is_none());
    }

    #[test]
    fn test_split_comparison() {
        let (left, op, right) = split_comparison("a === b").unwrap();
        assert_eq!((left.trim(), op, right.trim()), ("a", ComparisonOp::StrictEq, "b"));

        let (_, op, _) = split_comparison("i <= 10").unwrap();
        assert_eq!(op, ComparisonOp::Le);

        assert!(split_comparison("f = (x) => x").is_none());
        assert!(split_comparison("\"a < b\"").is_none());
    }
}
