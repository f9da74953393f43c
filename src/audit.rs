//! Drives the tree walk, feeds each file to the scanner and collects results.

use std::path::Path;

use tracing::{debug, info};

use crate::aggregator::Aggregator;
use crate::error::{AuditError, Result};
use crate::patterns::PatternSet;
use crate::scanner::{FileFilter, TreeWalker, scan_file};

/// Progress notifications emitted while an audit runs.
#[derive(Debug)]
pub enum AuditEvent<'a> {
    /// A file was read and scanned.
    FileScanned { path: &'a Path, matches: usize },
    /// A file could not be read; it contributes no matches.
    FileSkipped { error: &'a AuditError },
}

pub struct Auditor<F: FileFilter> {
    patterns: PatternSet,
    walker: TreeWalker<F>,
}

impl<F: FileFilter> Auditor<F> {
    #[must_use]
    pub const fn new(patterns: PatternSet, filter: F) -> Self {
        Self {
            patterns,
            walker: TreeWalker::new(filter),
        }
    }

    /// Audit `root` without progress reporting.
    ///
    /// # Errors
    /// See [`Self::run_with`].
    pub fn run(&self, root: &Path) -> Result<Aggregator> {
        self.run_with(root, |_| {})
    }

    /// Audit `root`, calling `on_event` once per visited file.
    ///
    /// Unreadable files are reported through `on_event` and skipped.
    ///
    /// # Errors
    /// Returns an error if the root is not a directory or a directory
    /// cannot be read.
    pub fn run_with(
        &self,
        root: &Path,
        mut on_event: impl FnMut(AuditEvent<'_>),
    ) -> Result<Aggregator> {
        let mut aggregator = Aggregator::new(self.patterns.len());

        self.walker.walk(root, |path| match scan_file(path, &self.patterns) {
            Ok(matches) => {
                debug!(path = %path.display(), matches = matches.len(), "scanned");
                on_event(AuditEvent::FileScanned {
                    path,
                    matches: matches.len(),
                });
                aggregator.record_file(matches);
            }
            Err(error) => {
                on_event(AuditEvent::FileSkipped { error: &error });
                aggregator.record_skipped();
            }
        })?;

        let stats = aggregator.stats();
        info!(
            files = stats.files_processed,
            skipped = stats.files_skipped,
            matches = stats.total_matches,
            "audit finished"
        );

        Ok(aggregator)
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
