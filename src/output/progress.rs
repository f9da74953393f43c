use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner counting scanned files.
///
/// The spinner is disabled in quiet mode or when stderr is not a TTY.
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a spinner writing to stderr.
    ///
    /// # Panics
    ///
    /// This function will panic if the progress template is invalid.
    /// The template is a compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self::new_with_visibility(quiet, std::io::stderr().is_terminal())
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };

        Self { progress_bar }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Scanning {pos} files {msg}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Count one scanned file and show its path.
    pub fn inc(&self, path: &str) {
        self.progress_bar.inc(1);
        self.progress_bar.set_message(path.to_string());
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    /// Run `f` with the spinner hidden so stderr output is not garbled.
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.progress_bar.suspend(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_progress_is_hidden() {
        let progress = ScanProgress::new_with_visibility(true, true);
        assert!(progress.progress_bar.is_hidden());
    }

    #[test]
    fn non_tty_progress_is_hidden() {
        let progress = ScanProgress::new_with_visibility(false, false);
        assert!(progress.progress_bar.is_hidden());
    }

    #[test]
    fn inc_counts_files() {
        let progress = ScanProgress::new_with_visibility(true, false);
        progress.inc("a.html");
        progress.inc("b.html");
        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    #[test]
    fn suspend_returns_closure_value() {
        let progress = ScanProgress::new_with_visibility(true, false);
        assert_eq!(progress.suspend(|| 42), 42);
    }
}
