//! Classified source lines
//!
//! A loaded program is represented as the ordered sequence of
//! [`ClassifiedLine`]s produced by [`super::classify_source`]. It is never
//! mutated after classification.

use super::scan::is_comment;
use serde::Serialize;
use std::fmt;

/// Statement kind inferred from a line's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Declaration,
    Assignment,
    Conditional,
    Loop,
    FunctionCall,
    FunctionDefinition,
    Return,
    Output,
    Other,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Declaration => "declaration",
            LineKind::Assignment => "assignment",
            LineKind::Conditional => "conditional",
            LineKind::Loop => "loop",
            LineKind::FunctionCall => "function-call",
            LineKind::FunctionDefinition => "function-definition",
            LineKind::Return => "return",
            LineKind::Output => "output",
            LineKind::Other => "other",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source line tagged with its statement kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    /// 1-based line number
    pub line_number: usize,
    pub kind: LineKind,
    /// Trimmed source text
    pub text: String,
    /// Column of the first non-whitespace character
    pub indent: usize,
}

impl ClassifiedLine {
    /// Whether the step driver stops on this line.
    ///
    /// Blank lines, comments, and lines made only of braces (optionally
    /// followed by `;`) are skipped. Every other line is eligible, whatever its kind.
    pub fn is_executable(&self) -> bool {
        let text = self.text.as_str();
        if text.is_empty() || is_comment(text) {
            return false;
        }
        let body = text.strip_suffix(';').unwrap_or(text);
        !body
            .chars()
            .all(|c| c == '{' || c == '}' || c.is_whitespace())
    }
}
