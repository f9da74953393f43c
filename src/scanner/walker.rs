use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{AuditError, Result};

use super::FileFilter;

/// Depth-first traversal that prunes excluded entries before descending.
pub struct TreeWalker<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> TreeWalker<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Call `on_file` for every file under `root` that passes the filter.
    ///
    /// Entries are visited in file-name order. Symlinks are not followed.
    ///
    /// # Errors
    /// Returns `RootNotFound` if `root` is not a directory, or `DirectoryRead`
    /// on the first entry that cannot be read; traversal stops there.
    pub fn walk(&self, root: &Path, mut on_file: impl FnMut(&Path)) -> Result<()> {
        if !root.is_dir() {
            return Err(AuditError::RootNotFound(root.to_path_buf()));
        }

        let entries = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let relative = relative_to(root, entry.path());
                let excluded = if entry.file_type().is_dir() {
                    self.filter.is_excluded_dir(relative)
                } else {
                    self.filter.is_excluded(relative)
                };
                if excluded {
                    debug!(path = %relative.display(), "excluded");
                }
                !excluded
            });

        for entry in entries {
            let entry = entry.map_err(|e| AuditError::DirectoryRead {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: e,
            })?;

            if entry.file_type().is_file() && self.filter.is_included(entry.path()) {
                on_file(entry.path());
            }
        }

        Ok(())
    }
}

fn relative_to<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
