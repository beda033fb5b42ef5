//! Task definitions and execution.
//!
//! A [`Task`] pairs a registered name with a [`TaskKind`]. Running a task
//! first plans its commands (enumerating application directories where
//! needed) and then executes them strictly in order with fail-fast
//! semantics.
//!
//! # Modules
//!
//! - [`plan`] - Command sequences for each task kind
//! - [`run`] - Ordered execution and the per-run state machine

pub mod plan;
pub mod run;

pub use run::{run_task, TaskRun, TaskState};

use crate::config::ProjectLayout;
use crate::error::Result;
use crate::shell::Command;

/// What a task does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Build every application, sync dependencies, build the compliance suite.
    Build,
    /// Build every application only.
    BuildApps,
    /// Remove build artifacts.
    Clean,
    /// Run the workspace test suite.
    Test,
    /// Serve the log viewer until interrupted.
    RunLogViewer,
}

impl TaskKind {
    /// Commands this kind runs for `layout`, in order.
    pub fn plan(self, layout: &ProjectLayout) -> Result<Vec<Command>> {
        match self {
            TaskKind::Build => plan::build(layout),
            TaskKind::BuildApps => plan::build_apps(layout),
            TaskKind::Clean => Ok(plan::clean(layout)),
            TaskKind::Test => Ok(plan::test()),
            TaskKind::RunLogViewer => Ok(plan::run_log_viewer(layout)),
        }
    }
}

/// A named, user-invokable task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    kind: TaskKind,
}

impl Task {
    pub fn new(name: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Plan this task's commands.
    pub fn plan(&self, layout: &ProjectLayout) -> Result<Vec<Command>> {
        self.kind.plan(layout)
    }
}
