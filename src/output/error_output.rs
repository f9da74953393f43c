//! Colored error and warning output on stderr.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use crate::error::AuditError;

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter for stderr with the given color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints a fatal error with its detail and suggestion.
    pub fn print_error(&self, error: &AuditError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Prints a recoverable error as a warning.
    pub fn print_warning(&self, error: &AuditError) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, error);
    }

    /// Writes `✖ {type}: {message}` followed by detail and suggestion lines.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &AuditError) {
        // Write failures on stderr cannot be reported anywhere; ignore them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {}:{} {}",
                ansi::BOLD,
                ansi::RED,
                error.error_type(),
                ansi::RESET,
                error.message()
            );
        } else {
            let _ = writeln!(w, "✖ {}: {}", error.error_type(), error.message());
        }
        self.write_tail(w, error);
    }

    /// Writes `⚠ Warning: {message}` followed by detail and suggestion lines.
    pub fn write_warning<W: Write>(&self, w: &mut W, error: &AuditError) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET,
                error.message()
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {}", error.message());
        }
        self.write_tail(w, error);
    }

    fn write_tail<W: Write>(&self, w: &mut W, error: &AuditError) {
        if let Some(d) = error.detail() {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
