use crate::memory::value::Value;

/// Arithmetic operators recognized by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithmeticOp {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(ArithmeticOp::Add),
            '-' => Some(ArithmeticOp::Sub),
            '*' => Some(ArithmeticOp::Mul),
            '/' => Some(ArithmeticOp::Div),
            '%' => Some(ArithmeticOp::Rem),
            _ => None,
        }
    }

    /// `+`/`-` bind looser than `*`/`/`/`%`
    pub fn is_additive(self) -> bool {
        matches!(self, ArithmeticOp::Add | ArithmeticOp::Sub)
    }

    /// IEEE semantics: division by zero yields infinity or NaN
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            ArithmeticOp::Add => a + b,
            ArithmeticOp::Sub => a - b,
            ArithmeticOp::Mul => a * b,
            ArithmeticOp::Div => a / b,
            ArithmeticOp::Rem => a % b,
        }
    }
}

/// Comparison operators recognized by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    StrictEq,
    StrictNe,
    LooseEq,
    LooseNe,
    Le,
    Ge,
    Lt,
    Gt,
}

impl ComparisonOp {
    /// Longest symbols first so `===` is never read as `==`
    pub const ALL: [ComparisonOp; 8] = [
        ComparisonOp::StrictEq,
        ComparisonOp::StrictNe,
        ComparisonOp::LooseEq,
        ComparisonOp::LooseNe,
        ComparisonOp::Le,
        ComparisonOp::Ge,
        ComparisonOp::Lt,
        ComparisonOp::Gt,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::StrictEq => "===",
            ComparisonOp::StrictNe => "!==",
            ComparisonOp::LooseEq => "==",
            ComparisonOp::LooseNe => "!=",
            ComparisonOp::Le => "<=",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
        }
    }

    pub fn apply(self, left: &Value, right: &Value) -> bool {
        match self {
            ComparisonOp::StrictEq => strict_equals(left, right),
            ComparisonOp::StrictNe => !strict_equals(left, right),
            ComparisonOp::LooseEq => loose_equals(left, right),
            ComparisonOp::LooseNe => !loose_equals(left, right),
            ComparisonOp::Lt | ComparisonOp::Gt | ComparisonOp::Le | ComparisonOp::Ge => {
                compare_ordering(self, left, right)
            }
        }
    }
}

/// `===`: same tag and same value, with `NaN` unequal to everything
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        _ => left == right,
    }
}

/// `==`: the coercing equality rule.
///
/// 1. `null`, `undefined`, and unresolved names only equal each other.
/// 2. A boolean operand becomes 1 or 0 and the comparison is retried.
/// 3. A number against a string or symbolic text parses the text as a number.
/// 4. Two text values compare by their text.
/// 5. Anything else falls back to [`strict_equals`].
pub fn loose_equals(left: &Value, right: &Value) -> bool {
    if left.is_nullish() || right.is_nullish() {
        return left.is_nullish() && right.is_nullish();
    }

    match (left, right) {
        (Value::Bool(b), other) | (other, Value::Bool(b)) => {
            loose_equals(&Value::Number(if *b { 1.0 } else { 0.0 }), other)
        }
        (Value::Number(n), other) | (other, Value::Number(n)) => match other.string_like() {
            Some(_) => *n == other.to_number(),
            None => strict_equals(left, right),
        },
        _ => match (left.string_like(), right.string_like()) {
            (Some(a), Some(b)) => a == b,
            _ => strict_equals(left, right),
        },
    }
}

/// `<`, `>`, `<=`, `>=`: text compares lexicographically, everything else numerically
fn compare_ordering(op: ComparisonOp, left: &Value, right: &Value) -> bool {
    if let (Some(a), Some(b)) = (left.string_like(), right.string_like()) {
        return match op {
            ComparisonOp::Lt => a < b,
            ComparisonOp::Gt => a > b,
            ComparisonOp::Le => a <= b,
            _ => a >= b,
        };
    }

    // NaN on either side makes every ordering false
    let (a, b) = (left.to_number(), right.to_number());
    match op {
        ComparisonOp::Lt => a < b,
        ComparisonOp::Gt => a > b,
        ComparisonOp::Le => a <= b,
        _ => a >= b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn text(s: &str) -> Value {
        Value::Str(s.to_string())
    }

    #[test]
    fn test_strict_equality_requires_same_tag() {
        assert!(strict_equals(&num(5.0), &num(5.0)));
        assert!(!strict_equals(&num(5.0), &text("5")));
        assert!(!strict_equals(&num(f64::NAN), &num(f64::NAN)));
    }

    #[test]
    fn test_loose_equality_coercions() {
        assert!(loose_equals(&num(5.0), &text("5")));
        assert!(loose_equals(&text(" 5 "), &num(5.0)));
        assert!(loose_equals(&Value::Bool(true), &num(1.0)));
        assert!(loose_equals(&Value::Bool(false), &text("0")));
        assert!(loose_equals(&Value::Null, &Value::Undefined));
        assert!(!loose_equals(&Value::Null, &num(0.0)));
        assert!(!loose_equals(&text("abc"), &num(0.0)));
        assert!(loose_equals(&text("abc"), &Value::Symbolic("abc".into())));
    }

    #[test]
    fn test_ordering() {
        assert!(ComparisonOp::Lt.apply(&num(2.0), &num(10.0)));
        assert!(!ComparisonOp::Lt.apply(&text("2"), &text("10")));
        assert!(ComparisonOp::Ge.apply(&text("5"), &num(5.0)));
        assert!(!ComparisonOp::Le.apply(&Value::Undefined, &num(5.0)));
        assert!(!ComparisonOp::Gt.apply(&Value::Undefined, &num(5.0)));
    }

    #[test]
    fn test_arithmetic_follows_ieee() {
        assert_eq!(ArithmeticOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(ArithmeticOp::Rem.apply(1.0, 0.0).is_nan());
        assert_eq!(ArithmeticOp::Rem.apply(-7.0, 3.0), -1.0);
    }
}
