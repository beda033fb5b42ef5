//! frisc-task - Fail-fast task runner for the frisc emulator workspace.
//!
//! A single invocation names one task (`build`, `clean`, `test`,
//! `run_log_viewer`, ...) and the runner executes that task's fixed
//! sequence of external commands, each in its own working directory,
//! stopping at the first failure.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Project layout and `.frisc-task.yml` loading
//! - [`discovery`] - Application directory enumeration
//! - [`dispatcher`] - Name resolution, usage and exit status
//! - [`error`] - Error types and result aliases
//! - [`registry`] - The ordered task registry
//! - [`shell`] - Command records and execution
//! - [`tasks`] - Task kinds, command plans and fail-fast runs
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use frisc_task::config::{ProjectLayout, RegistryVariant};
//! use frisc_task::registry::Registry;
//!
//! let registry = Registry::for_variant(RegistryVariant::Current).unwrap();
//! let test = registry.find("test").unwrap();
//! let commands = test.plan(&ProjectLayout::new("/project")).unwrap();
//! assert_eq!(commands[0].display(), "cargo test");
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod shell;
pub mod tasks;
pub mod ui;

pub use error::{Result, TaskError};
