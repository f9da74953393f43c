use std::path::PathBuf;

use serde::Deserialize;

/// Contents of a `.brand-audit.toml` file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tokens: TokensConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

/// Where token patterns come from.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TokensConfig {
    /// JSON token file. Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Additions to the built-in path filter.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Extensions scanned in addition to the built-in allowlist (without the dot).
    #[serde(default)]
    pub extra_extensions: Vec<String>,

    /// Glob patterns, relative to the scan root, excluded in addition to the built-in denylist.
    #[serde(default)]
    pub exclude: Vec<String>,
}
