//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, play mode
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   variables, loops, timeline, console, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an [`Engine`] and
//! call [`App::run`] to start the event loop. The engine itself has no notion of
//! time; play mode is the app calling [`Engine::advance_one_step`] on an interval.
//!
//! [`Engine`]: crate::interpreter::Engine
//! [`Engine::advance_one_step`]: crate::interpreter::Engine::advance_one_step
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
