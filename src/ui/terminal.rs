//! Terminal UI writing to the process streams.

use super::theme::TaskTheme;
use super::UserInterface;

/// UI implementation backed by stdout and stderr.
///
/// Command echoes and messages go to stdout so they interleave with the
/// children's own output; errors and reports go to stderr.
pub struct TerminalUI {
    theme: TaskTheme,
}

impl TerminalUI {
    /// Create a terminal UI, with or without colour.
    pub fn new(colors: bool) -> Self {
        Self {
            theme: TaskTheme::for_colors(colors),
        }
    }
}

impl UserInterface for TerminalUI {
    fn command(&mut self, text: &str) {
        println!("{}", self.theme.format_command(text));
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn report(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
}
