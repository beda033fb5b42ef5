//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    commands: Vec<String>,
    messages: Vec<String>,
    errors: Vec<String>,
    reports: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all echoed command lines.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured diagnostic reports.
    pub fn reports(&self) -> &[String] {
        &self.reports
    }
}

impl UserInterface for MockUI {
    fn command(&mut self, text: &str) {
        self.commands.push(text.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn report(&mut self, msg: &str) {
        self.reports.push(msg.to_string());
    }
}
