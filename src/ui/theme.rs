//! Visual theme and styling.

use console::Style;

/// Styles used for runner output.
#[derive(Debug, Clone)]
pub struct TaskTheme {
    /// Style for echoed command lines (green).
    pub command: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for TaskTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskTheme {
    /// Create the coloured theme.
    ///
    /// Styles are forced on; whether colour is wanted at all is decided by
    /// choosing between this and [`TaskTheme::plain`].
    pub fn new() -> Self {
        Self {
            command: Style::new().green().force_styling(true),
            error: Style::new().red().bold().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            command: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick the coloured or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an echoed command line.
    pub fn format_command(&self, text: &str) -> String {
        format!("{}", self.command.apply_to(text))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
