//! Command records and the execution primitive.
//!
//! A [`Command`] is one program invocation: an argument vector, the
//! directory it runs in (relative to the project root), whether a failure
//! is tolerated, and whether it is expected to exit on its own. Commands
//! are never passed through a shell.

use crate::error::{Result, TaskError};
use crate::ui::UserInterface;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tracing::{debug, info};

/// Exit code a shell reports for a program it could not find.
const NOT_FOUND_CODE: i32 = 127;

/// Exit code conventionally reported for a child stopped by Ctrl-C.
const INTERRUPTED_CODE: i32 = 130;

/// How long a command is expected to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// Runs to completion on its own.
    #[default]
    Finite,
    /// Runs until externally interrupted (development servers).
    Persistent,
}

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
    ignore_failure: bool,
    lifetime: Lifetime,
}

impl Command {
    /// Create a command for `program` running in the project root.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: PathBuf::from("."),
            ignore_failure: false,
            lifetime: Lifetime::Finite,
        }
    }

    /// Build a command from whitespace-separated words.
    ///
    /// Only for fixed command lines; there is no quoting.
    pub fn from_words(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let program = words.next().unwrap_or_default();
        Self::new(program).args(words)
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir`, interpreted relative to the project root.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Tolerate a nonzero exit.
    pub fn ignore_failure(mut self) -> Self {
        self.ignore_failure = true;
        self
    }

    /// Mark as running until interrupted.
    pub fn persistent(mut self) -> Self {
        self.lifetime = Lifetime::Persistent;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn ignores_failure(&self) -> bool {
        self.ignore_failure
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// The command line as echoed before it runs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Absolute directory this command runs in.
    pub fn resolve_dir(&self, root: &Path) -> PathBuf {
        if self.working_dir == Path::new(".") {
            root.to_path_buf()
        } else {
            root.join(&self.working_dir)
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,

    /// Whether the child stopped because of an interrupt.
    pub interrupted: bool,
}

impl ExecutionOutcome {
    /// A normal exit with `code`.
    pub fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            interrupted: code == INTERRUPTED_CODE,
        }
    }

    /// An exit caused by SIGINT/SIGTERM.
    pub fn interrupted() -> Self {
        Self {
            code: None,
            interrupted: true,
        }
    }

    /// Whether the exit code was zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self {
                    code: None,
                    interrupted: signal == libc::SIGINT || signal == libc::SIGTERM,
                };
            }
        }

        match status.code() {
            Some(code) => Self::exited(code),
            None => Self {
                code: None,
                interrupted: false,
            },
        }
    }
}

/// Something that can start a command and wait for it.
///
/// The runner only reports how the child ended; failure policy lives in
/// [`execute`].
pub trait CommandRunner {
    /// Run `command` with `cwd` as its working directory and block until it ends.
    fn run(&mut self, command: &Command, cwd: &Path) -> Result<ExecutionOutcome>;
}

/// Runner that spawns real child processes with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &Command, cwd: &Path) -> Result<ExecutionOutcome> {
        let mut cmd = std::process::Command::new(command.program());
        cmd.args(command.arguments())
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = cmd.spawn().map_err(|source| TaskError::Spawn {
            command: command.display(),
            source,
        })?;

        // Installed after spawn so the child keeps the default SIGINT disposition.
        let _guard = match command.lifetime() {
            Lifetime::Persistent => Some(super::InterruptGuard::ignore()),
            Lifetime::Finite => None,
        };

        let status = child.wait()?;
        Ok(ExecutionOutcome::from_status(status))
    }
}

/// Echo, run and judge one command.
///
/// Returns `Err(ExecutionFailure)` when the command fails and does not
/// tolerate failure; the caller must not run anything after it. Ignored
/// failures (including a program that cannot be started) come back as
/// `Ok` with the nonzero outcome.
pub fn execute(
    runner: &mut dyn CommandRunner,
    ui: &mut dyn UserInterface,
    root: &Path,
    command: &Command,
) -> Result<ExecutionOutcome> {
    let text = command.display();
    ui.command(&text);

    let cwd = command.resolve_dir(root);
    debug!(command = %text, cwd = %cwd.display(), "running");

    let outcome = match runner.run(command, &cwd) {
        Ok(outcome) => outcome,
        Err(TaskError::Spawn { source, .. }) if command.ignores_failure() => {
            debug!(command = %text, error = %source, "ignoring command that failed to start");
            ExecutionOutcome::exited(NOT_FOUND_CODE)
        }
        Err(e) => return Err(e),
    };

    if command.lifetime() == Lifetime::Persistent && outcome.interrupted {
        info!(command = %text, "stopped by interrupt");
        return Ok(outcome);
    }

    if outcome.success() {
        return Ok(outcome);
    }

    if command.ignores_failure() {
        debug!(command = %text, code = ?outcome.code, "ignoring failure");
        return Ok(outcome);
    }

    Err(TaskError::ExecutionFailure {
        command: text,
        code: outcome.code,
    })
}
