use std::path::{Component, Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{AuditError, Result};

/// Directory or file names excluded wherever they appear in a path.
pub const EXCLUDED_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    ".idea",
    "dist",
    "build",
    "coverage",
];

/// Consecutive path components marking an excluded subtree.
pub const EXCLUDED_SUBTREES: &[&[&str]] = &[&["images", "_OLD"]];

/// File-name suffixes that are never scanned.
pub const EXCLUDED_SUFFIXES: &[&str] = &[".log", ".min.js", ".min.css"];

/// The audit tool's own sources and configuration.
pub const EXCLUDED_FILE_NAMES: &[&str] = &["brand-audit.js", "brand-config.js", ".brand-audit.toml"];

/// Extensions (lowercase, without the dot) of text files worth scanning.
pub const INCLUDED_EXTENSIONS: &[&str] = &[
    "html", "css", "js", "json", "xml", "txt", "md", "yml", "yaml", "conf", "config",
];

pub trait FileFilter {
    /// Whether `relative` (a path relative to the scan root) is denied.
    fn is_excluded(&self, relative: &Path) -> bool;

    /// Whether `path` has a scannable extension.
    fn is_included(&self, path: &Path) -> bool;

    /// Whether the directory at `relative` should be pruned before descending.
    fn is_excluded_dir(&self, relative: &Path) -> bool {
        self.is_excluded(relative)
    }

    /// Exclusion wins over inclusion.
    fn should_scan(&self, relative: &Path) -> bool {
        !self.is_excluded(relative) && self.is_included(relative)
    }
}

/// Stand-in child name used to test a directory against file globs.
const DIR_CHILD: &str = "_";

pub struct PathFilter {
    extensions: Vec<String>,
    extra_excludes: GlobSet,
    /// Exact root-relative paths, e.g. the token file in use.
    excluded_files: Vec<PathBuf>,
}

impl PathFilter {
    /// The built-in denylist and allowlist only.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            extensions: INCLUDED_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            extra_excludes: GlobSet::empty(),
            excluded_files: Vec::new(),
        }
    }

    /// Built-in rules extended with extra extensions and exclude globs.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extra_extensions: &[String], extra_excludes: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in extra_excludes {
            let glob = Glob::new(pattern).map_err(|e| AuditError::InvalidExcludeGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let extra_excludes = builder
            .build()
            .map_err(|e| AuditError::InvalidExcludeGlob {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        let mut extensions: Vec<String> =
            INCLUDED_EXTENSIONS.iter().map(|e| (*e).to_string()).collect();
        for ext in extra_extensions {
            let ext = ext.trim_start_matches('.').to_lowercase();
            if !ext.is_empty() && !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }

        Ok(Self {
            extensions,
            extra_excludes,
            excluded_files: Vec::new(),
        })
    }

    /// Never scan `file` when it lies under `root`.
    ///
    /// Both paths are made absolute without resolving symlinks, so `root`
    /// and `file` may be given relative to the working directory.
    #[must_use]
    pub fn excluding_file(mut self, root: &Path, file: &Path) -> Self {
        let (Ok(root), Ok(file)) = (std::path::absolute(root), std::path::absolute(file)) else {
            return self;
        };
        if let Ok(relative) = file.strip_prefix(&root) {
            self.excluded_files.push(relative.to_path_buf());
        }
        self
    }

    fn has_excluded_component(relative: &Path) -> bool {
        let names: Vec<_> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if names.iter().any(|name| EXCLUDED_NAMES.contains(&name.as_str())) {
            return true;
        }

        EXCLUDED_SUBTREES.iter().any(|subtree| {
            names
                .windows(subtree.len())
                .any(|window| window.iter().zip(subtree.iter()).all(|(a, b)| a == b))
        })
    }

    fn has_excluded_file_name(relative: &Path) -> bool {
        let Some(name) = relative.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();

        EXCLUDED_FILE_NAMES.contains(&&*name)
            || EXCLUDED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
    }
}

impl FileFilter for PathFilter {
    fn is_excluded(&self, relative: &Path) -> bool {
        Self::has_excluded_component(relative)
            || Self::has_excluded_file_name(relative)
            || self.extra_excludes.is_match(relative)
            || self.excluded_files.iter().any(|file| file == relative)
    }

    fn is_excluded_dir(&self, relative: &Path) -> bool {
        // `vendor/**` does not match `vendor` itself, only what is inside it.
        self.is_excluded(relative) || self.extra_excludes.is_match(relative.join(DIR_CHILD))
    }

    fn is_included(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
