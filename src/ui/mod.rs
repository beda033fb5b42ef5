//! Terminal output for task runs.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled text to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use frisc_task::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.command("cargo test");
//! ui.message("Invalid task name.");
//! assert_eq!(ui.commands(), ["cargo test"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, TaskTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Echo a command line before it runs (highlighted).
    fn command(&mut self, text: &str);

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write an unstyled diagnostic line (no icon, no colour).
    fn report(&mut self, msg: &str);
}
