//! Mutable execution state owned by the engine

use crate::interpreter::loops::LoopTable;
use crate::memory::Environment;
use crate::snapshot::{Console, History};
use serde::Serialize;
use std::fmt;

/// Lifecycle of a loaded program.
///
/// The engine moves `Idle → Running → Complete | Error`. `Complete` and `Error`
/// hold until a reset. `Paused` is never entered by the engine itself; callers
/// that stop driving a running engine report it for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Complete,
    Error,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Idle => "idle",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Paused => "paused",
            ExecutionStatus::Complete => "complete",
            ExecutionStatus::Error => "error",
        }
    }

    /// `Complete` or `Error`: no further step changes anything
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExecutionStatus::Complete | ExecutionStatus::Error)
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ExecutionState {
    pub environment: Environment,
    pub loops: LoopTable,
    pub call_stack: Vec<String>,
    pub console: Console,
    pub history: History,
    pub status: ExecutionStatus,
    pub error: Option<String>,
    /// Line number of the last executed line, 0 before the first step
    pub current_line: usize,
    pub steps_taken: usize,
}

impl ExecutionState {
    pub fn new(initial_frame: &str) -> Self {
        ExecutionState {
            environment: Environment::new(),
            loops: LoopTable::new(),
            call_stack: vec![initial_frame.to_string()],
            console: Console::new(),
            history: History::new(),
            status: ExecutionStatus::Idle,
            error: None,
            current_line: 0,
            steps_taken: 0,
        }
    }

    /// Clear everything and return to `Idle` with a single call-stack frame
    pub fn reset(&mut self, initial_frame: &str) {
        self.environment.clear();
        self.loops.clear();
        self.call_stack.clear();
        self.call_stack.push(initial_frame.to_string());
        self.console.clear();
        self.history.clear();
        self.status = ExecutionStatus::Idle;
        self.error = None;
        self.current_line = 0;
        self.steps_taken = 0;
    }
}
