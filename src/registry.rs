//! The task registry.
//!
//! A [`Registry`] is an ordered list of [`Task`]s with unique names, built
//! once at startup and only read afterwards.

use crate::config::RegistryVariant;
use crate::error::{Result, TaskError};
use crate::tasks::{Task, TaskKind};

/// Ordered, immutable set of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    tasks: Vec<Task>,
}

impl Registry {
    /// Build a registry, rejecting duplicate names.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self> {
        for (i, task) in tasks.iter().enumerate() {
            if tasks[..i].iter().any(|t| t.name() == task.name()) {
                return Err(TaskError::DuplicateTask {
                    name: task.name().to_string(),
                });
            }
        }
        Ok(Self { tasks })
    }

    /// The task set exposed by `variant`.
    pub fn for_variant(variant: RegistryVariant) -> Result<Self> {
        let table: &[(&str, TaskKind)] = match variant {
            RegistryVariant::Current => &[
                ("build", TaskKind::Build),
                ("clean", TaskKind::Clean),
                ("test", TaskKind::Test),
                ("run_log_viewer", TaskKind::RunLogViewer),
            ],
            RegistryVariant::Legacy => &[
                ("build_apps", TaskKind::BuildApps),
                ("run_test", TaskKind::Test),
                ("run_log_viewer", TaskKind::RunLogViewer),
            ],
            RegistryVariant::Full => &[
                ("build", TaskKind::Build),
                ("build_apps", TaskKind::BuildApps),
                ("clean", TaskKind::Clean),
                ("test", TaskKind::Test),
                ("run_test", TaskKind::Test),
                ("run_log_viewer", TaskKind::RunLogViewer),
            ],
        };

        Self::from_tasks(
            table
                .iter()
                .map(|(name, kind)| Task::new(*name, *kind))
                .collect(),
        )
    }

    /// Find a task by exact name, scanning in registration order.
    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name() == name)
    }

    /// Registered names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(Task::name).collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
