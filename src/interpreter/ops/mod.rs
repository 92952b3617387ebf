//! Operator semantics for the expression evaluator
//!
//! - [`binary`]: arithmetic on numbers and the strict, loose, and ordering comparisons

pub mod binary;

pub use binary::{loose_equals, strict_equals, ArithmeticOp, ComparisonOp};
