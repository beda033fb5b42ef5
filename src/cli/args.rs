//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! the single optional positional argument names the task.

use crate::config::RegistryVariant;
use clap::Parser;
use std::path::PathBuf;

/// frisc-task - Run a named build, clean, test or serve task.
#[derive(Debug, Parser)]
#[command(name = "frisc-task")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task to run (omit to list registered tasks)
    pub task: Option<String>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, env = "FRISC_TASK_PROJECT")]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides default .frisc-task.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Task set to expose
    #[arg(long, value_enum)]
    pub variant: Option<RegistryVariant>,

    /// Always exit 0, even for unknown tasks and failed commands
    #[arg(long)]
    pub compat_exit: bool,

    /// Print the commands a task would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
