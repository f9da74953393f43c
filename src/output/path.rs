//! Path display utilities for consistent output formatting.

use std::path::Path;

/// Format a path for display, relative to `root` when it lies beneath it.
///
/// Separators are normalized to forward slashes. Returns `"."` when `path`
/// equals `root`.
#[must_use]
pub fn display_path(path: &Path, root: Option<&Path>) -> String {
    let relative = root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = relative.to_string_lossy().replace('\\', "/");
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}
