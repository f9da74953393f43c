use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::aggregator::Report;
use crate::patterns::{PatternOrigin, PatternSet};

use super::{ColorMode, ansi, display_path};

/// Maximum characters of context shown per match.
pub const CONTEXT_EXCERPT_CHARS: usize = 80;

const RULE_WIDE: usize = 50;
const RULE_NARROW: usize = 30;

pub struct TextFormatter {
    use_colors: bool,
    root: Option<PathBuf>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::IsTerminal::is_terminal(&std::io::stdout())),
            root: None,
        }
    }

    /// Formatter that never emits ANSI codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            use_colors: false,
            root: None,
        }
    }

    /// Display file paths relative to `root`.
    #[must_use]
    pub fn with_root(mut self, root: &Path) -> Self {
        self.root = Some(root.to_path_buf());
        self
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Render the full audit report.
    #[must_use]
    pub fn format(&self, report: &Report<'_>) -> String {
        let mut output = String::new();
        self.write_header(&mut output, report);

        if report.passed() {
            self.write_success(&mut output, report);
        } else {
            self.write_issues(&mut output, report);
            Self::write_pattern_summary(&mut output, report);
            Self::write_next_steps(&mut output);
        }

        output
    }

    fn write_header(&self, output: &mut String, report: &Report<'_>) {
        let stats = &report.stats;
        let _ = writeln!(output, "\n🔍 {}", self.paint(ansi::BOLD, "BRAND AUDIT REPORT"));
        let _ = writeln!(output, "{}", "=".repeat(RULE_WIDE));
        let _ = writeln!(output, "📁 Files processed: {}", stats.files_processed);
        let _ = writeln!(output, "🎯 Total matches found: {}", stats.total_matches);
        let _ = writeln!(output, "🔍 Patterns searched: {}", stats.patterns_searched);
        if stats.files_skipped > 0 {
            let _ = writeln!(
                output,
                "{}",
                self.paint(
                    ansi::YELLOW,
                    &format!("⚠ Files skipped (unreadable): {}", stats.files_skipped)
                )
            );
        }
    }

    fn write_success(&self, output: &mut String, report: &Report<'_>) {
        let stats = &report.stats;
        let _ = writeln!(
            output,
            "\n✅ {}",
            self.paint(ansi::GREEN, "SUCCESS: No old brand tokens found!")
        );
        let _ = writeln!(
            output,
            "   Scanned {} against {}.",
            plural(stats.files_processed, "file", "files"),
            plural(stats.patterns_searched, "pattern", "patterns")
        );
        let _ = writeln!(output, "\n🎉 Brand transformation appears complete!");
    }

    fn write_issues(&self, output: &mut String, report: &Report<'_>) {
        let _ = writeln!(output, "\n❌ {}", self.paint(ansi::RED, "ISSUES FOUND:"));
        let _ = writeln!(output, "{}", "-".repeat(RULE_WIDE));

        for (file, matches) in &report.by_file {
            let path = display_path(file, self.root.as_deref());
            let _ = writeln!(
                output,
                "\n📄 {} ({})",
                self.paint(ansi::CYAN, &path),
                plural(matches.len(), "match", "matches")
            );
            for m in matches {
                let _ = writeln!(
                    output,
                    "   Line {}: \"{}\" (pattern: {})",
                    m.line, m.token, m.pattern
                );
                if let Some(text) = excerpt(&m.context.line, CONTEXT_EXCERPT_CHARS) {
                    let _ = writeln!(output, "   Context: {text}");
                }
            }
        }
    }

    fn write_pattern_summary(output: &mut String, report: &Report<'_>) {
        let _ = writeln!(output, "\n📊 SUMMARY BY PATTERN:");
        let _ = writeln!(output, "{}", "-".repeat(RULE_NARROW));
        for entry in &report.by_pattern {
            let noun = if entry.count == 1 { "match" } else { "matches" };
            let _ = writeln!(output, "{:>3} {noun}: {}", entry.count, entry.pattern);
        }
    }

    fn write_next_steps(output: &mut String) {
        let _ = writeln!(output, "\n💡 NEXT STEPS:");
        let _ = writeln!(output, "1. Review and update the files listed above");
        let _ = writeln!(
            output,
            "2. Replace old tokens with values from the brand configuration"
        );
        let _ = writeln!(output, "3. Re-run this audit until no tokens remain");
    }
}

/// Trimmed, single-line excerpt of `line`, cut to `max_chars` characters.
///
/// Returns `None` for blank lines. A cut excerpt ends with `...`.
#[must_use]
pub fn excerpt(line: &str, max_chars: usize) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut chars = trimmed.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => Some(format!("{}...", &trimmed[..cut])),
        None => Some(trimmed.to_string()),
    }
}

/// Lines printed before the walk starts.
#[must_use]
pub fn format_preamble(root: &Path, patterns: &PatternSet) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "🚀 Starting brand audit...");
    let scanned = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let _ = writeln!(output, "📂 Scanning directory: {}", scanned.display());
    if let PatternOrigin::TokenFile(path) = patterns.origin() {
        let _ = writeln!(
            output,
            "📋 Loaded {} from {}",
            plural(patterns.len(), "custom token", "custom tokens"),
            path.display()
        );
    }
    let _ = writeln!(
        output,
        "🔍 Searching for {}",
        plural(patterns.len(), "token pattern", "token patterns")
    );
    output
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
