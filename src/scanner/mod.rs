mod file;
mod filter;
mod types;
mod walker;

pub use file::{scan_file, scan_text};
pub use filter::{
    EXCLUDED_FILE_NAMES, EXCLUDED_NAMES, EXCLUDED_SUBTREES, EXCLUDED_SUFFIXES, FileFilter,
    INCLUDED_EXTENSIONS, PathFilter,
};
pub use types::{Context, Match};
pub use walker::TreeWalker;
