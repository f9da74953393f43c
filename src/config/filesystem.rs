//! Read-only file access used by the config and token loaders.
//!
//! Loaders are generic over [`FileSystem`] so unit tests can run against an
//! in-memory tree.

use std::path::Path;

pub trait FileSystem {
    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the file is missing or unreadable.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;
}

/// Delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
