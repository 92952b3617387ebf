//! Source classification
//!
//! The simulator never builds an AST. Source text is split into lines and each
//! line is tagged with an inferred statement kind:
//!
//! - [`line`]: the [`ClassifiedLine`] record and [`LineKind`] tags
//! - [`classify`]: the ordered classification predicates
//! - [`scan`]: small text-scanning helpers shared with the evaluator

pub mod classify;
pub mod line;
pub mod scan;

pub use classify::{classify_line, classify_source, classify_text};
pub use line::{ClassifiedLine, LineKind};
