//! External command execution.

pub mod command;
pub mod interrupt;

pub use command::{execute, Command, CommandRunner, ExecutionOutcome, Lifetime, SystemRunner};
pub use interrupt::InterruptGuard;
