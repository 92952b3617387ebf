//! Main TUI application state and logic

use super::panes::{self, SourceScrollState, StatusRenderData};
use crate::interpreter::{Engine, ExecutionStatus};
use crate::snapshot::Snapshot;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Console,
    Variables,
    Loops,
    Timeline,
}

impl FocusedPane {
    /// Move focus to the next pane (left column top to bottom, then right column)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Loops,
            FocusedPane::Loops => FocusedPane::Timeline,
            FocusedPane::Timeline => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    pub engine: Engine,

    /// Snapshot returned by the most recent engine call
    pub snapshot: Snapshot,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub console_scroll: usize,
    pub variables_scroll: usize,
    pub loops_scroll: usize,
    pub timeline_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Delay between automatic steps
    pub play_interval: Duration,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Option<Instant>,
}

impl App {
    /// Create a new app around an engine that already holds a program
    pub fn new(engine: Engine, play_interval: Duration) -> Self {
        let snapshot = engine.current_state();
        App {
            engine,
            snapshot,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            console_scroll: 0,
            variables_scroll: 0,
            loops_scroll: 0,
            timeline_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            play_interval,
            last_play_time: Instant::now(),
            last_space_press: None,
        }
    }

    /// Status as shown to the user.
    ///
    /// The engine never pauses; a running engine that nobody is driving
    /// reads as paused.
    pub fn display_status(&self) -> ExecutionStatus {
        match self.engine.status() {
            ExecutionStatus::Running if !self.is_playing => ExecutionStatus::Paused,
            status => status,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.play_interval {
                self.step_forward();
                if self.engine.status().is_terminal() {
                    self.is_playing = false;
                    if self.engine.status() == ExecutionStatus::Complete {
                        self.status_message = "Playback complete".to_string();
                    }
                } else {
                    self.status_message = "Playing...".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Console (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Variables | Loops | Timeline
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(40),
            ])
            .split(columns[1]);

        let snapshot = &self.snapshot;

        panes::render_source_pane(
            frame,
            left_rows[0],
            self.engine.source(),
            snapshot.current_line,
            self.engine.next_line(),
            snapshot.status == ExecutionStatus::Error,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_terminal_pane(
            frame,
            left_rows[1],
            &snapshot.output,
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        panes::render_variables_pane(
            frame,
            right_rows[0],
            &snapshot.variables,
            &snapshot.call_stack,
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        panes::render_loops_pane(
            frame,
            right_rows[1],
            &snapshot.loops,
            self.focused_pane == FocusedPane::Loops,
            &mut self.loops_scroll,
        );

        panes::render_timeline_pane(
            frame,
            right_rows[2],
            &snapshot.history,
            self.focused_pane == FocusedPane::Timeline,
            &mut self.timeline_scroll,
        );

        let status = StatusRenderData {
            message: &self.status_message,
            status: self.display_status(),
            steps_taken: snapshot.steps_taken,
            current_line: snapshot.current_line,
            line_count: self.engine.line_count(),
            interval_ms: self.play_interval.as_millis() as u64,
        };
        panes::render_status_bar(frame, main_chunks[1], &status);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    if self.engine.status().is_terminal() {
                        break;
                    }
                    self.step_forward();
                    stepped += 1;
                }
                if self.engine.status() != ExecutionStatus::Error {
                    self.status_message = format!("Stepped forward {} step(s)", stepped);
                }
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.is_playing = false;
                self.engine.reset();
                self.snapshot = self.engine.current_state();
                self.console_scroll = 0;
                self.timeline_scroll = 0;
                self.status_message = "Reset".to_string();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_sub(1);
                }
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_sub(1);
                }
                FocusedPane::Loops => {
                    self.loops_scroll = self.loops_scroll.saturating_sub(1);
                }
                FocusedPane::Timeline => {
                    self.timeline_scroll = self.timeline_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling down makes the current line move up visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Console => {
                    self.console_scroll = self.console_scroll.saturating_add(1);
                }
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_add(1);
                }
                FocusedPane::Loops => {
                    self.loops_scroll = self.loops_scroll.saturating_add(1);
                }
                FocusedPane::Timeline => {
                    self.timeline_scroll = self.timeline_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                let debounced = self
                    .last_space_press
                    .is_some_and(|at| at.elapsed() < Duration::from_millis(200));
                if !debounced {
                    self.last_space_press = Some(Instant::now());
                    self.toggle_play();
                }
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.status_message = "Paused".to_string();
        } else if self.engine.status().is_terminal() {
            self.status_message = "Nothing left to play, press r to reset".to_string();
        } else {
            self.is_playing = true;
            // First automatic step happens on the next loop iteration
            self.last_play_time = Instant::now()
                .checked_sub(self.play_interval)
                .unwrap_or_else(Instant::now);
            self.status_message = "Playing...".to_string();
        }
    }

    /// Advance the engine one step and keep the log panes pinned to the bottom
    fn step_forward(&mut self) {
        let was_terminal = self.engine.status().is_terminal();
        self.snapshot = self.engine.advance_one_step();

        match self.snapshot.status {
            ExecutionStatus::Error => {
                self.status_message = self.snapshot.error.clone().unwrap_or_default();
            }
            ExecutionStatus::Complete if was_terminal => {
                self.status_message = "Execution complete, press r to reset".to_string();
            }
            ExecutionStatus::Complete => {
                self.status_message = "Execution complete".to_string();
            }
            _ => {
                self.status_message = "Stepped forward".to_string();
            }
        }
        self.console_scroll = usize::MAX;
        self.timeline_scroll = usize::MAX;
    }
}
