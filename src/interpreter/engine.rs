// Step driver for the execution simulator

use crate::config::EngineConfig;
use crate::interpreter::errors::StepError;
use crate::interpreter::state::{ExecutionState, ExecutionStatus};
use crate::parser::{classify_source, ClassifiedLine, LineKind};
use crate::snapshot::Snapshot;
use log::{debug, trace, warn};

/// Line-by-line simulator for a loaded snippet.
///
/// The engine owns every piece of mutable state. Each call to
/// [`Engine::advance_one_step`] runs the next eligible line to completion and
/// hands back an independent [`Snapshot`].
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,

    /// Raw source as loaded
    source: String,

    /// Classified program, replaced only by `load_source`
    lines: Vec<ClassifiedLine>,

    /// Index into `lines` of the last executed line
    cursor: Option<usize>,

    pub(crate) state: ExecutionState,

    /// Returned unchanged once execution is complete or failed
    last_snapshot: Snapshot,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let state = ExecutionState::new(&config.initial_frame);
        let last_snapshot = Snapshot::capture(&state, None);
        Engine {
            config,
            source: String::new(),
            lines: Vec::new(),
            cursor: None,
            state,
            last_snapshot,
        }
    }

    /// Classify `text` and reset all execution state
    pub fn load_source(&mut self, text: &str) {
        self.source = text.to_string();
        self.lines = classify_source(text);
        debug!(
            "loaded {} lines ({} executable)",
            self.lines.len(),
            self.lines.iter().filter(|line| line.is_executable()).count()
        );
        self.reset();
    }

    /// Return to `Idle` with the loaded program still in place
    pub fn reset(&mut self) {
        self.cursor = None;
        self.state.reset(&self.config.initial_frame);
        self.last_snapshot = Snapshot::capture(&self.state, None);
        debug!("engine reset");
    }

    /// Execute the next eligible line.
    ///
    /// Once the engine is complete or has failed this returns the last snapshot
    /// unchanged. Reaching the end of the program marks the engine complete and
    /// deactivates every loop tracker.
    pub fn advance_one_step(&mut self) -> Snapshot {
        if self.state.status.is_terminal() {
            return self.last_snapshot.clone();
        }

        let Some(index) = self.next_executable() else {
            self.state.status = ExecutionStatus::Complete;
            self.state.loops.deactivate_all();
            debug!("execution complete after {} steps", self.state.steps_taken);
            self.last_snapshot = Snapshot::capture(&self.state, None);
            return self.last_snapshot.clone();
        };

        self.cursor = Some(index);
        let previous = self.state.environment.clone();

        match self.step_line(index) {
            Ok(()) => {
                self.state.status = ExecutionStatus::Running;
                self.state.steps_taken += 1;
            }
            Err(err) => {
                warn!("step failed: {}", err);
                self.state.error = Some(err.report());
                self.state.status = ExecutionStatus::Error;
            }
        }

        self.last_snapshot = Snapshot::capture(&self.state, Some(&previous));
        self.last_snapshot.clone()
    }

    /// Snapshot of the current state with no change flags
    pub fn current_state(&self) -> Snapshot {
        Snapshot::capture(&self.state, None)
    }

    pub fn status(&self) -> ExecutionStatus {
        self.state.status
    }

    /// Number of source lines, including blank ones
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn lines(&self) -> &[ClassifiedLine] {
        &self.lines
    }

    /// Line number the next step will execute, if any
    pub fn next_line(&self) -> Option<usize> {
        if self.state.status.is_terminal() {
            return None;
        }
        self.next_executable()
            .map(|index| self.lines[index].line_number)
    }

    fn next_executable(&self) -> Option<usize> {
        let start = self.cursor.map_or(0, |index| index + 1);
        (start..self.lines.len()).find(|&index| self.lines[index].is_executable())
    }

    fn step_line(&mut self, index: usize) -> Result<(), StepError> {
        // `index` always comes from `next_executable`
        let line = self.lines[index].clone();
        self.state.current_line = line.line_number;

        if let Some(limit) = self.config.max_steps {
            if self.state.steps_taken >= limit {
                return Err(StepError::StepLimitExceeded {
                    limit,
                    line: line.line_number,
                });
            }
        }

        trace!("line {} [{}]: {}", line.line_number, line.kind, line.text);
        match line.kind {
            LineKind::Declaration => self.execute_declaration(&line),
            LineKind::Assignment => self.execute_assignment(&line),
            LineKind::Conditional => self.execute_conditional(&line),
            LineKind::Loop => self.execute_loop(&line),
            LineKind::FunctionDefinition => self.execute_function_definition(&line),
            LineKind::Return => self.execute_return(&line),
            LineKind::Output => self.execute_output(&line),
            LineKind::FunctionCall => self.execute_call(&line),
            LineKind::Other => self.execute_other(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine_is_idle() {
        let engine = Engine::default();
        let snapshot = engine.current_state();
        assert_eq!(engine.status(), ExecutionStatus::Idle);
        assert_eq!(snapshot.call_stack, vec!["main"]);
        assert_eq!(snapshot.current_line, 0);
    }

    #[test]
    fn test_skips_blank_comment_and_brace_lines() {
        let mut engine = Engine::default();
        engine.load_source("\n// note\n{\nlet a = 1;\n};\nlet b = 2;");
        assert_eq!(engine.next_line(), Some(4));
        assert_eq!(engine.advance_one_step().current_line, 4);
        assert_eq!(engine.advance_one_step().current_line, 6);
        assert!(engine.advance_one_step().is_complete);
        assert_eq!(engine.next_line(), None);
    }

    #[test]
    fn test_step_limit() {
        let mut engine = Engine::new(EngineConfig {
            max_steps: Some(1),
            ..EngineConfig::default()
        });
        engine.load_source("let a = 1;\nlet b = 2;");
        engine.advance_one_step();
        let snapshot = engine.advance_one_step();

        assert_eq!(snapshot.status, ExecutionStatus::Error);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Error at line 2: Step limit of 1 exceeded")
        );
        assert!(snapshot.variable("b").is_none());
    }
}
