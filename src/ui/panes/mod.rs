//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`source`]: Source display with highlighting and current/error line indicator
//! - [`variables`]: Variable table with change highlighting
//! - [`loops`]: Loop trackers with progress bars and iteration history
//! - [`timeline`]: Execution history entries
//! - [`terminal`]: Console output from `console.log` and friends
//! - [`status`]: Status bar with keybindings and execution state
//! - `utils`: Shared block, scroll, and value styling helpers
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function that reads from a
//! [`Snapshot`](crate::snapshot::Snapshot) and never touches the engine.

mod utils;

pub mod loops;
pub mod source;
pub mod status;
pub mod terminal;
pub mod timeline;
pub mod variables;

// Re-export render functions for convenience
pub use loops::render_loops_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::render_terminal_pane;
pub use timeline::render_timeline_pane;
pub use variables::render_variables_pane;
