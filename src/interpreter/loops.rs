//! Loop header simulation (`for`, `while`, `do`).
//!
//! Execution is strictly line by line, so a loop header never jumps back.
//! Instead a `for`/`while` header opens a [`LoopTracker`] recording the
//! controlling variable and its bound, and later declarations and assignments
//! of that variable feed the tracker's iteration history.
//!
//! Supported header shapes:
//! - `while (name OP bound)`
//! - `for ([let|var|const] name = start; name OP bound; update)`
//!
//! Anything else (including `do`) only appends a timeline entry.

use crate::interpreter::constants::LOOP_ID_PREFIX;
use crate::interpreter::engine::Engine;
use crate::interpreter::errors::StepError;
use crate::interpreter::expressions::{evaluate, split_comparison};
use crate::memory::value::Value;
use crate::parser::classify::{assignment_parts, declaration_keyword};
use crate::parser::scan::{first_paren_group, is_identifier, split_top_level, strip_keyword};
use crate::parser::ClassifiedLine;
use crate::snapshot::HistoryKind;
use serde::Serialize;

/// Progress record for one loop instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopTracker {
    /// Synthetic id, `loop_<n>` in creation order
    pub id: String,
    pub controlling_variable: String,
    pub current_value: f64,
    pub bound_value: f64,
    /// Every numeric value the controlling variable has taken, oldest first
    pub iteration_history: Vec<f64>,
    pub is_active: bool,
    /// Source line of the header that opened the tracker
    pub header_line: usize,
}

impl LoopTracker {
    /// Fraction of the way from the first observed value to the bound, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        let start = self.iteration_history.first().copied().unwrap_or(self.current_value);
        let span = self.bound_value - start;
        if span == 0.0 || !span.is_finite() {
            return if self.current_value == self.bound_value { 1.0 } else { 0.0 };
        }
        ((self.current_value - start) / span).clamp(0.0, 1.0)
    }
}

/// All trackers of a load session, in creation order
#[derive(Debug, Clone, Default)]
pub struct LoopTable {
    trackers: Vec<LoopTracker>,
    next_id: usize,
}

impl LoopTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a tracker for `variable`.
    ///
    /// Any earlier active tracker on the same variable is deactivated so a
    /// write to the variable only feeds the newest loop.
    pub fn open(
        &mut self,
        variable: &str,
        current: f64,
        bound: f64,
        header_line: usize,
    ) -> &LoopTracker {
        for tracker in &mut self.trackers {
            if tracker.is_active && tracker.controlling_variable == variable {
                tracker.is_active = false;
            }
        }

        let id = format!("{}{}", LOOP_ID_PREFIX, self.next_id);
        self.next_id += 1;
        let index = self.trackers.len();
        self.trackers.push(LoopTracker {
            id,
            controlling_variable: variable.to_string(),
            current_value: current,
            bound_value: bound,
            iteration_history: vec![current],
            is_active: true,
            header_line,
        });
        &self.trackers[index]
    }

    /// Whether the header on `line` already opened a tracker
    pub fn has_header(&self, line: usize) -> bool {
        self.trackers.iter().any(|tracker| tracker.header_line == line)
    }

    /// Feed a numeric write of `name` to the active trackers controlled by it
    pub fn observe(&mut self, name: &str, value: f64) {
        for tracker in &mut self.trackers {
            if tracker.is_active && tracker.controlling_variable == name {
                tracker.current_value = value;
                tracker.iteration_history.push(value);
            }
        }
    }

    pub fn deactivate_all(&mut self) {
        for tracker in &mut self.trackers {
            tracker.is_active = false;
        }
    }

    pub fn trackers(&self) -> &[LoopTracker] {
        &self.trackers
    }

    pub fn get(&self, id: &str) -> Option<&LoopTracker> {
        self.trackers.iter().find(|tracker| tracker.id == id)
    }

    pub fn clear(&mut self) {
        self.trackers.clear();
        self.next_id = 0;
    }
}

/// Identifier that can name a variable (not a bare number)
fn is_variable_name(text: &str) -> bool {
    is_identifier(text) && !text.starts_with(|c: char| c.is_ascii_digit())
}

/// Parsed `for` header pieces
struct ForHeader<'a> {
    keyword: Option<&'static str>,
    variable: &'a str,
    start: &'a str,
    condition: &'a str,
}

fn parse_for_header(inner: &str) -> Option<ForHeader<'_>> {
    let parts = split_top_level(inner, ';');
    if parts.len() != 3 {
        return None;
    }

    let init = parts[0].trim();
    let (keyword, init) = match declaration_keyword(init) {
        Some((keyword, rest)) => (Some(keyword), rest.trim_start()),
        None => (None, init),
    };
    let (variable, start) = assignment_parts(init)?;

    Some(ForHeader {
        keyword,
        variable,
        start,
        condition: parts[1],
    })
}

impl Engine {
    /// Simulate a loop header line
    pub(crate) fn execute_loop(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let text = line.text.as_str();
        let number = line.line_number;

        if let Some(rest) = strip_keyword(text, "while") {
            if let Some(condition) = first_paren_group(rest) {
                self.open_while_tracker(condition, number);
                let taken = evaluate(condition, &self.state.environment).is_truthy();
                let outcome = if taken { "continuing" } else { "finished" };
                self.state
                    .history
                    .record(number, HistoryKind::Loop, format!("Loop: {}", outcome));
                return Ok(());
            }
        }

        if let Some(rest) = strip_keyword(text, "for") {
            if let Some(header) = first_paren_group(rest).and_then(parse_for_header) {
                self.start_for_loop(&header, number)?;
                self.state
                    .history
                    .record(number, HistoryKind::Loop, "Loop started");
                return Ok(());
            }
        }

        self.state
            .history
            .record(number, HistoryKind::Loop, "Loop iteration");
        Ok(())
    }

    fn open_while_tracker(&mut self, condition: &str, header_line: usize) {
        if self.state.loops.has_header(header_line) {
            return;
        }
        let Some((left, _, right)) = split_comparison(condition) else {
            return;
        };
        let variable = left.trim();
        if !is_variable_name(variable) {
            return;
        }
        let env = &self.state.environment;
        let Some(bound) = evaluate(right, env).as_number() else {
            return;
        };
        let current = env.number_of(variable).unwrap_or(0.0);

        let tracker = self.state.loops.open(variable, current, bound, header_line);
        log::debug!(
            "opened {} on '{}' ({} -> {})",
            tracker.id,
            tracker.controlling_variable,
            current,
            bound
        );
    }

    fn start_for_loop(
        &mut self,
        header: &ForHeader<'_>,
        header_line: usize,
    ) -> Result<(), StepError> {
        let env = &self.state.environment;
        let Some(start) = evaluate(header.start, env).as_number() else {
            return Ok(());
        };
        let Some(bound) = split_comparison(header.condition)
            .and_then(|(_, _, right)| evaluate(right, env).as_number())
        else {
            return Ok(());
        };

        if header.keyword.is_none() && env.is_constant(header.variable) {
            return Err(StepError::ConstReassignment {
                name: header.variable.to_string(),
                line: header_line,
            });
        }
        self.state
            .environment
            .set(header.variable, Value::Number(start), false);

        if !self.state.loops.has_header(header_line) {
            let tracker = self.state.loops.open(header.variable, start, bound, header_line);
            log::debug!(
                "opened {} on '{}' ({} -> {})",
                tracker.id,
                tracker.controlling_variable,
                start,
                bound
            );
        }
        Ok(())
    }
}
