// Snapshot projection of the execution state

use crate::interpreter::loops::LoopTracker;
use crate::interpreter::state::{ExecutionState, ExecutionStatus};
use crate::memory::value::{Value, ValueKind};
use crate::memory::Environment;
use serde::Serialize;

/// Category of a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Loop,
    Condition,
    Assignment,
    Output,
    Other,
}

impl HistoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryKind::Loop => "loop",
            HistoryKind::Condition => "condition",
            HistoryKind::Assignment => "assignment",
            HistoryKind::Output => "output",
            HistoryKind::Other => "other",
        }
    }
}

/// One line of the execution timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub line: usize,
    pub description: String,
    /// Logical creation order, starting at 0 after each reset
    pub timestamp: u64,
    pub kind: HistoryKind,
}

/// Append-only execution timeline
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    next_timestamp: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: usize, kind: HistoryKind, description: impl Into<String>) {
        self.entries.push(HistoryEntry {
            line,
            description: description.into(),
            timestamp: self.next_timestamp,
            kind,
        });
        self.next_timestamp += 1;
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_timestamp = 0;
    }
}

/// Console buffer for output calls
#[derive(Debug, Clone, Default)]
pub struct Console {
    lines: Vec<String>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&mut self, text: String) {
        self.lines.push(text);
    }

    /// Get all lines as a vector of strings
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// A binding as shown to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableView {
    pub name: String,
    pub value: Value,
    pub declared_type: ValueKind,
    /// Output form of the value, precomputed for rendering
    pub display: String,
    /// New or different from the environment before the step
    pub changed: bool,
}

/// Immutable projection of the execution state at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Line number of the last executed line, 0 before the first step
    pub current_line: usize,
    pub variables: Vec<VariableView>,
    pub call_stack: Vec<String>,
    pub history: Vec<HistoryEntry>,
    pub output: Vec<String>,
    pub error: Option<String>,
    pub is_complete: bool,
    pub loops: Vec<LoopTracker>,
    pub status: ExecutionStatus,
    pub steps_taken: usize,
}

impl Snapshot {
    /// Project `state` into a snapshot.
    ///
    /// `previous` is the environment as it stood before the most recent step.
    /// A binding is flagged `changed` when it is missing from `previous` or its
    /// value differs there. Without `previous` nothing is flagged.
    pub fn capture(state: &ExecutionState, previous: Option<&Environment>) -> Snapshot {
        let variables = state
            .environment
            .iter()
            .map(|binding| {
                let changed = previous.is_some_and(|env| {
                    env.value_of(&binding.name)
                        .map_or(true, |old| *old != binding.value)
                });
                VariableView {
                    name: binding.name.clone(),
                    value: binding.value.clone(),
                    declared_type: binding.declared_type,
                    display: binding.value.to_string(),
                    changed,
                }
            })
            .collect();

        Snapshot {
            current_line: state.current_line,
            variables,
            call_stack: state.call_stack.clone(),
            history: state.history.entries().to_vec(),
            output: state.console.lines().to_vec(),
            error: state.error.clone(),
            is_complete: state.status == ExecutionStatus::Complete,
            loops: state.loops.trackers().to_vec(),
            status: state.status,
            steps_taken: state.steps_taken,
        }
    }

    /// Look up a variable by name
    pub fn variable(&self, name: &str) -> Option<&VariableView> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Trackers still marked active
    pub fn active_loops(&self) -> impl Iterator<Item = &LoopTracker> {
        self.loops.iter().filter(|tracker| tracker.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_timestamps_restart_after_clear() {
        let mut history = History::new();
        history.record(1, HistoryKind::Other, "Line 1");
        history.record(2, HistoryKind::Output, "Output: hi");
        assert_eq!(history.entries()[1].timestamp, 1);

        history.clear();
        history.record(3, HistoryKind::Loop, "Loop started");
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].timestamp, 0);
    }

    #[test]
    fn test_changed_flag_needs_previous_environment() {
        let mut state = ExecutionState::new("main");
        state.environment.set("x", Value::Number(1.0), false);
        state.environment.set("y", Value::Number(f64::NAN), false);

        let snapshot = Snapshot::capture(&state, None);
        assert!(snapshot.variables.iter().all(|v| !v.changed));

        let previous = state.environment.clone();
        state.environment.set("x", Value::Number(2.0), false);
        state.environment.set("z", Value::Str("new".into()), false);

        let snapshot = Snapshot::capture(&state, Some(&previous));
        assert!(snapshot.variable("x").is_some_and(|v| v.changed));
        assert!(snapshot.variable("y").is_some_and(|v| !v.changed));
        assert!(snapshot.variable("z").is_some_and(|v| v.changed));
    }
}
