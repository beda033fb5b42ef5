//! Ordered, fail-fast task execution.

use super::Task;
use crate::config::ProjectLayout;
use crate::error::Result;
use crate::shell::{execute, Command, CommandRunner};
use crate::ui::UserInterface;
use tracing::{info, warn};

/// Progress of one task run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Planned, nothing executed yet.
    Pending,

    /// Executing the command at this index.
    Running(usize),

    /// Every command completed acceptably.
    Succeeded,

    /// A command failed; nothing after it ran.
    Aborted,
}

impl TaskState {
    /// Check if this is a terminal state (no more changes expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Aborted)
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskState::Pending => write!(f, "pending"),
            TaskState::Running(i) => write!(f, "running step {}", i + 1),
            TaskState::Succeeded => write!(f, "succeeded"),
            TaskState::Aborted => write!(f, "aborted"),
        }
    }
}

/// A planned task and where its execution stands.
#[derive(Debug)]
pub struct TaskRun<'a> {
    task: &'a Task,
    commands: Vec<Command>,
    state: TaskState,
}

impl<'a> TaskRun<'a> {
    /// Plan `task` against `layout`.
    pub fn plan(task: &'a Task, layout: &ProjectLayout) -> Result<Self> {
        let commands = task.plan(layout)?;
        Ok(Self {
            task,
            commands,
            state: TaskState::Pending,
        })
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Run every planned command in order, stopping at the first failure.
    ///
    /// Running a run that already reached a terminal state does nothing.
    pub fn execute(
        &mut self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
        layout: &ProjectLayout,
    ) -> Result<()> {
        if self.state.is_terminal() {
            return Ok(());
        }

        info!(task = self.task.name(), steps = self.commands.len(), "starting task");

        for (index, command) in self.commands.iter().enumerate() {
            self.state = TaskState::Running(index);
            if let Err(e) = execute(runner, ui, layout.root(), command) {
                self.state = TaskState::Aborted;
                warn!(task = self.task.name(), step = index + 1, "task aborted");
                return Err(e);
            }
        }

        self.state = TaskState::Succeeded;
        info!(task = self.task.name(), "task finished");
        Ok(())
    }
}

/// Plan and execute `task`.
pub fn run_task(
    task: &Task,
    layout: &ProjectLayout,
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    TaskRun::plan(task, layout)?.execute(runner, ui, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::shell::ExecutionOutcome;
    use crate::tasks::TaskKind;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Records commands and fails the ones whose text matches.
    #[derive(Default)]
    struct RecordingRunner {
        ran: Vec<String>,
        failing: Vec<(String, i32)>,
    }

    impl RecordingRunner {
        fn failing_on(command: &str, code: i32) -> Self {
            Self {
                ran: Vec::new(),
                failing: vec![(command.to_string(), code)],
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&mut self, command: &Command, _cwd: &Path) -> Result<ExecutionOutcome> {
            let text = command.display();
            self.ran.push(text.clone());
            let code = self
                .failing
                .iter()
                .find(|(c, _)| *c == text)
                .map(|(_, code)| *code)
                .unwrap_or(0);
            Ok(ExecutionOutcome::exited(code))
        }
    }

    #[test]
    fn runs_all_commands_in_order() {
        let layout = ProjectLayout::new("/proj");
        let task = Task::new("clean", TaskKind::Clean);
        let mut runner = RecordingRunner::default();
        let mut ui = MockUI::new();

        let mut run = TaskRun::plan(&task, &layout).unwrap();
        assert_eq!(run.state(), TaskState::Pending);
        run.execute(&mut runner, &mut ui, &layout).unwrap();

        assert_eq!(run.state(), TaskState::Succeeded);
        assert_eq!(runner.ran, ["cargo clean", "cargo clean", "make clean"]);
        assert_eq!(ui.commands(), runner.ran.as_slice());
    }

    #[test]
    fn first_failure_stops_the_task() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("apps/a")).unwrap();
        let layout = ProjectLayout::new(temp.path());
        let task = Task::new("build", TaskKind::Build);
        let mut runner = RecordingRunner::failing_on("git submodule update --init --recursive", 1);
        let mut ui = MockUI::new();

        let mut run = TaskRun::plan(&task, &layout).unwrap();
        let err = run.execute(&mut runner, &mut ui, &layout).unwrap_err();

        assert!(matches!(
            err,
            TaskError::ExecutionFailure { code: Some(1), .. }
        ));
        assert_eq!(run.state(), TaskState::Aborted);
        assert_eq!(
            runner.ran,
            ["make clean", "make", "git submodule update --init --recursive"]
        );
    }

    #[test]
    fn aborted_run_does_not_restart() {
        let layout = ProjectLayout::new("/proj");
        let task = Task::new("test", TaskKind::Test);
        let mut runner = RecordingRunner::failing_on("cargo test", 101);
        let mut ui = MockUI::new();

        let mut run = TaskRun::plan(&task, &layout).unwrap();
        assert!(run.execute(&mut runner, &mut ui, &layout).is_err());
        run.execute(&mut runner, &mut ui, &layout).unwrap();

        assert_eq!(runner.ran.len(), 1);
    }

    #[test]
    fn ignored_failure_does_not_stop_the_run() {
        let layout = ProjectLayout::new("/proj");
        let task = Task::new("test", TaskKind::Test);
        let mut run = TaskRun::plan(&task, &layout).unwrap();
        run.commands = vec![
            Command::from_words("make clean").ignore_failure(),
            Command::from_words("make"),
        ];
        let mut runner = RecordingRunner::failing_on("make clean", 2);
        let mut ui = MockUI::new();

        run.execute(&mut runner, &mut ui, &layout).unwrap();

        assert_eq!(run.state(), TaskState::Succeeded);
        assert_eq!(runner.ran, ["make clean", "make"]);
    }

    #[test]
    fn empty_plan_succeeds_without_running_anything() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("apps")).unwrap();
        let layout = ProjectLayout::new(temp.path());
        let task = Task::new("build_apps", TaskKind::BuildApps);
        let mut runner = RecordingRunner::default();
        let mut ui = MockUI::new();

        run_task(&task, &layout, &mut runner, &mut ui).unwrap();

        assert!(runner.ran.is_empty());
    }

    #[test]
    fn planning_failure_runs_nothing() {
        let temp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(temp.path());
        let task = Task::new("build", TaskKind::Build);
        let mut runner = RecordingRunner::default();
        let mut ui = MockUI::new();

        let err = run_task(&task, &layout, &mut runner, &mut ui).unwrap_err();

        assert!(matches!(err, TaskError::Io(_)));
        assert!(runner.ran.is_empty());
    }

    #[test]
    fn state_display() {
        assert_eq!(TaskState::Running(0).to_string(), "running step 1");
        assert_eq!(TaskState::Aborted.to_string(), "aborted");
    }
}
