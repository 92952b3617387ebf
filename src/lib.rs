//! # Introduction
//!
//! stepviz walks through a small JavaScript-like snippet one line at a time,
//! capturing a snapshot of variables, console output, loop progress, and an
//! execution timeline after each step. Snapshots are consumed by a terminal UI
//! built with [ratatui](https://docs.rs/ratatui) or streamed as JSON.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Classifier → Engine → Snapshots → TUI / JSON
//! ```
//!
//! 1. [`parser`] splits the source into lines and tags each with a statement kind.
//! 2. [`interpreter`] is the step driver. Each step runs one eligible line and
//!    evaluates its expressions shallowly, without building an AST.
//! 3. [`memory`] holds the variable [`memory::Environment`] and the tagged
//!    [`memory::value::Value`] variants.
//! 4. [`snapshot`] keeps the timeline, the console, and the immutable
//!    [`snapshot::Snapshot`] projection handed to callers.
//! 5. [`sorting`] is a separate step-log generator for classic sort algorithms.
//! 6. [`ui`] is the ratatui-based TUI. It is not part of the stable library API.
//!
//! ## What a step does
//!
//! Declarations and assignments bind values. Output calls append to the
//! console and loop headers open progress trackers. Conditions are evaluated
//! and logged but never change which line runs next: the engine always
//! visits lines in source order.

pub mod config;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod snapshot;
pub mod sorting;
pub mod ui;

pub use config::Config;
pub use interpreter::{Engine, ExecutionStatus, StepError};
pub use snapshot::Snapshot;
