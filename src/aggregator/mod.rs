//! Run-scoped collection of matches and the report derived from them.

use std::path::Path;

use indexmap::IndexMap;

use crate::scanner::Match;

/// Counters updated while the tree is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub total_matches: usize,
    pub patterns_searched: usize,
}

/// Owns every match and counter for a single audit run.
#[derive(Debug, Default)]
pub struct Aggregator {
    matches: Vec<Match>,
    stats: RunStatistics,
}

impl Aggregator {
    #[must_use]
    pub fn new(patterns_searched: usize) -> Self {
        Self {
            matches: Vec::new(),
            stats: RunStatistics {
                patterns_searched,
                ..RunStatistics::default()
            },
        }
    }

    /// Record a successfully read file and its matches (possibly none).
    pub fn record_file(&mut self, matches: Vec<Match>) {
        self.stats.files_processed += 1;
        self.stats.total_matches += matches.len();
        self.matches.extend(matches);
    }

    /// Record a file that could not be read.
    pub const fn record_skipped(&mut self) {
        self.stats.files_skipped += 1;
    }

    #[must_use]
    pub const fn stats(&self) -> RunStatistics {
        self.stats
    }

    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report::new(self.stats, &self.matches)
    }
}

/// Number of matches attributed to one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternCount<'a> {
    pub pattern: &'a str,
    pub count: usize,
}

/// Grouped view over a run's matches.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub stats: RunStatistics,
    /// Matches per file, files in first-encountered order.
    pub by_file: IndexMap<&'a Path, Vec<&'a Match>>,
    /// Match counts per pattern, most frequent first; ties keep first-encountered order.
    pub by_pattern: Vec<PatternCount<'a>>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(stats: RunStatistics, matches: &'a [Match]) -> Self {
        let mut by_file: IndexMap<&Path, Vec<&Match>> = IndexMap::new();
        let mut counts: IndexMap<&str, usize> = IndexMap::new();

        for m in matches {
            by_file.entry(m.file.as_path()).or_default().push(m);
            *counts.entry(m.pattern.as_str()).or_default() += 1;
        }

        let mut by_pattern: Vec<_> = counts
            .into_iter()
            .map(|(pattern, count)| PatternCount { pattern, count })
            .collect();
        by_pattern.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            stats,
            by_file,
            by_pattern,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.by_file.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
