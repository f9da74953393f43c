mod builtin;

pub use builtin::DEFAULT_TOKENS;

use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use crate::config::{FileSystem, RealFileSystem};
use crate::error::{AuditError, Result};

/// A compiled, case-insensitive token pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a raw pattern source.
    ///
    /// # Errors
    /// Returns the regex error if `source` is not a valid expression.
    pub fn new(source: &str) -> std::result::Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The source text the pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Every non-overlapping, non-empty match on `line`.
    pub fn find_iter<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .find_iter(line)
            .filter(|m| !m.is_empty())
            .map(|m| m.as_str())
    }
}

/// Where a pattern set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOrigin {
    Builtin,
    TokenFile(PathBuf),
}

/// Ordered, immutable collection of patterns.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    origin: PatternOrigin,
}

impl PatternSet {
    /// The built-in token list.
    ///
    /// # Panics
    /// Panics if a built-in pattern fails to compile, which the unit tests rule out.
    #[must_use]
    pub fn builtin() -> Self {
        let patterns = DEFAULT_TOKENS
            .iter()
            .map(|source| Pattern::new(source).expect("built-in token pattern compiles"))
            .collect();
        Self {
            patterns,
            origin: PatternOrigin::Builtin,
        }
    }

    /// Compile a list of raw sources, stopping at the first invalid entry.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for the first entry that does not compile, or
    /// `Config` if the list is empty.
    pub fn from_sources<S: AsRef<str>>(sources: &[S], origin: PatternOrigin) -> Result<Self> {
        if sources.is_empty() {
            return Err(AuditError::Config(
                "token list is empty; nothing would ever be reported".to_string(),
            ));
        }

        let patterns = sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let source = source.as_ref();
                Pattern::new(source).map_err(|e| AuditError::InvalidPattern {
                    index,
                    pattern: source.to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns, origin })
    }

    /// Parse a JSON array of pattern sources.
    ///
    /// # Errors
    /// Returns `TokenFileParse` for malformed JSON, otherwise see [`Self::from_sources`].
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let sources: Vec<String> =
            serde_json::from_str(content).map_err(|e| AuditError::TokenFileParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        Self::from_sources(&sources, PatternOrigin::TokenFile(path.to_path_buf()))
    }

    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[must_use]
    pub const fn origin(&self) -> &PatternOrigin {
        &self.origin
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Load the built-in set, or the token file when one is given.
///
/// # Errors
/// Returns a configuration error if the token file is missing, unreadable,
/// malformed, or holds a pattern that does not compile.
pub fn load_patterns(tokens_path: Option<&Path>) -> Result<PatternSet> {
    load_patterns_with_fs(&RealFileSystem, tokens_path)
}

/// [`load_patterns`] over an arbitrary filesystem.
///
/// # Errors
/// See [`load_patterns`].
pub fn load_patterns_with_fs<F: FileSystem>(
    fs: &F,
    tokens_path: Option<&Path>,
) -> Result<PatternSet> {
    let Some(path) = tokens_path else {
        return Ok(PatternSet::builtin());
    };

    let content = fs
        .read_to_string(path)
        .map_err(|e| AuditError::TokenFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    PatternSet::from_json(&content, path)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
