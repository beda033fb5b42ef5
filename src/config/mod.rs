//! Configuration for the task runner.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use frisc_task::config::{parse_config, RegistryVariant};
//! use std::path::Path;
//!
//! let config = parse_config("variant: legacy\n", Path::new(".frisc-task.yml")).unwrap();
//! assert_eq!(config.variant, Some(RegistryVariant::Legacy));
//! ```
//!
//! # Precedence
//!
//! 1. Built-in defaults
//! 2. Project config (`.frisc-task.yml`)
//! 3. Command-line flags

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, CONFIG_FILE_NAME};
pub use schema::{ExitPolicy, ProjectLayout, RegistryVariant, Settings, TaskConfig};
