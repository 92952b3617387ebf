//! Execution simulator
//!
//! This module provides the core execution logic:
//! - [`engine`]: the step driver and its public API
//! - [`expressions`]: the shallow text-fragment evaluator
//! - [`statements`] and [`loops`]: per-kind line handlers
//! - [`state`]: the mutable execution state and its status
//! - [`errors`]: step failure types
//!
//! # Execution Model
//!
//! There is no AST and no control flow. The engine visits eligible lines in
//! source order, one per step, and each line only updates bindings, output,
//! loop trackers, and the timeline. A snapshot is built after every step.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod expressions;
pub mod loops;
pub mod ops;
pub mod state;
pub mod statements;

pub use engine::Engine;
pub use errors::StepError;
pub use state::{ExecutionState, ExecutionStatus};
