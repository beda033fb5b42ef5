//! Task dispatching.
//!
//! Resolves the requested task name against a [`Registry`] and runs the
//! task, prints usage, or reports an unknown name. The dispatcher never
//! ends the process; it returns what happened and `main` picks the exit
//! status with [`exit_status`].

use crate::config::{ExitPolicy, ProjectLayout};
use crate::error::{Result, TaskError};
use crate::registry::Registry;
use crate::shell::CommandRunner;
use crate::tasks::{run_task, TaskRun};
use crate::ui::UserInterface;
use std::path::Path;

/// Message printed for a name that is not registered.
pub const INVALID_TASK_MESSAGE: &str = "Invalid task name.";

/// Exit status for an unregistered name under [`ExitPolicy::Strict`].
pub const UNKNOWN_TASK_EXIT: u8 = 2;

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No name given; registered names were printed.
    Usage(Vec<String>),
    /// The named task ran to completion.
    Completed(String),
    /// The named task was planned and printed but not run.
    Planned(String),
    /// The name is not registered; nothing ran.
    UnknownTask(String),
}

/// Routes a requested name to its task.
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    layout: &'a ProjectLayout,
    dry_run: bool,
}

impl<'a> Dispatcher<'a> {
    pub fn new(registry: &'a Registry, layout: &'a ProjectLayout) -> Self {
        Self {
            registry,
            layout,
            dry_run: false,
        }
    }

    /// Print planned commands instead of running them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Dispatch `requested`, or print usage when it is `None`.
    ///
    /// Command failures come back as `Err(ExecutionFailure)`; an unknown
    /// name is an `Ok` outcome because nothing was attempted.
    pub fn dispatch(
        &self,
        requested: Option<&str>,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<DispatchOutcome> {
        let Some(name) = requested else {
            let names: Vec<String> = self
                .registry
                .names()
                .into_iter()
                .map(String::from)
                .collect();
            ui.message(&format!("Usage: [{}]", names.join(", ")));
            return Ok(DispatchOutcome::Usage(names));
        };

        let Some(task) = self.registry.find(name) else {
            tracing::debug!(name, "no such task");
            ui.message(INVALID_TASK_MESSAGE);
            return Ok(DispatchOutcome::UnknownTask(name.to_string()));
        };

        if self.dry_run {
            let run = TaskRun::plan(task, self.layout)?;
            ui.message(&format!(
                "{} (dry-run mode, {} commands)",
                task.name(),
                run.commands().len()
            ));
            for command in run.commands() {
                if command.working_dir() == Path::new(".") {
                    ui.command(&command.display());
                } else {
                    ui.command(&format!(
                        "{}  (in {})",
                        command.display(),
                        command.working_dir().display()
                    ));
                }
            }
            return Ok(DispatchOutcome::Planned(task.name().to_string()));
        }

        run_task(task, self.layout, runner, ui)?;
        Ok(DispatchOutcome::Completed(task.name().to_string()))
    }
}

/// Tell the operator why a dispatch failed.
///
/// A failed command is reported as a plain `returncode: N` line so scripts
/// can match it; other errors go through [`UserInterface::error`].
pub fn report_failure(result: &Result<DispatchOutcome>, ui: &mut dyn UserInterface) {
    match result {
        Err(TaskError::ExecutionFailure { code, .. }) => {
            let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
            ui.report(&format!("returncode: {}", code));
        }
        Err(e) => ui.error(&format!("Error: {}", e)),
        Ok(_) => {}
    }
}

/// Process exit status for a dispatch result.
pub fn exit_status(result: &Result<DispatchOutcome>, policy: ExitPolicy) -> u8 {
    if policy == ExitPolicy::Compatible {
        return 0;
    }

    match result {
        Ok(DispatchOutcome::UnknownTask(_)) => UNKNOWN_TASK_EXIT,
        Ok(_) => 0,
        Err(TaskError::ExecutionFailure { code, .. }) => match code {
            Some(code) => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            None => 1,
        },
        Err(_) => 1,
    }
}
