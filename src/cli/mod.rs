//! Command-line interface.
//!
//! Argument definitions live in [`args`]; dispatching is in
//! [`crate::dispatcher`].

pub mod args;

pub use args::Cli;
