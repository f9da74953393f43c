use std::path::Path;

use tracing::trace;

use crate::error::{AuditError, Result};
use crate::patterns::PatternSet;

use super::{Context, Match};

/// Read `path` as UTF-8 and scan it.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read or is not valid UTF-8.
pub fn scan_file(path: &Path, patterns: &PatternSet) -> Result<Vec<Match>> {
    let content = std::fs::read_to_string(path).map_err(|e| AuditError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(scan_text(path, &content, patterns))
}

/// Apply every pattern to every line of `content`.
#[must_use]
pub fn scan_text(path: &Path, content: &str, patterns: &PatternSet) -> Vec<Match> {
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut matches = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        for pattern in patterns.patterns() {
            for token in pattern.find_iter(line) {
                trace!(file = %path.display(), line = index + 1, token, "match");
                matches.push(Match {
                    file: path.to_path_buf(),
                    line: index + 1,
                    token: token.to_string(),
                    context: Context::around(&lines, index),
                    pattern: pattern.source().to_string(),
                });
            }
        }
    }
    matches
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
