use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read token file: {path}")]
    TokenFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid token file: {path}")]
    TokenFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid token pattern #{index}: {pattern}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid exclude glob: {pattern}")]
    InvalidExcludeGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Scan root is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Short category name used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::TokenFileRead { .. }
            | Self::TokenFileParse { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidExcludeGlob { .. }
            | Self::TomlParse(_) => "Config",
            Self::RootNotFound(_) | Self::DirectoryRead { .. } => "Audit",
            Self::FileRead { .. } => "IO",
        }
    }

    /// Human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::TokenFileRead { path, .. } => {
                format!("cannot read token file '{}'", path.display())
            }
            Self::TokenFileParse { path, .. } => {
                format!("'{}' is not a JSON array of strings", path.display())
            }
            Self::InvalidPattern { index, pattern, .. } => {
                format!("token #{index} '{pattern}' is not a valid regular expression")
            }
            Self::InvalidExcludeGlob { pattern, .. } => {
                format!("exclude pattern '{pattern}' is not a valid glob")
            }
            Self::TomlParse(_) => "configuration file is not valid TOML".to_string(),
            Self::RootNotFound(path) => {
                format!("scan root '{}' does not exist or is not a directory", path.display())
            }
            Self::DirectoryRead { path, .. } => {
                format!("cannot read directory '{}'", path.display())
            }
            Self::FileRead { path, .. } => format!("cannot read '{}'", path.display()),
        }
    }

    /// Underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::TokenFileRead { source, .. } | Self::FileRead { source, .. } => {
                Some(source.to_string())
            }
            Self::TokenFileParse { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidExcludeGlob { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => Some(e.to_string()),
            Self::DirectoryRead { source, .. } => Some(source.to_string()),
            Self::Config(_) | Self::RootNotFound(_) => None,
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TokenFileRead { .. } => Some("Check that the --tokens path exists and is readable"),
            Self::TokenFileParse { .. } => {
                Some("The token file must contain a JSON array of strings, e.g. [\"old\\\\s*name\"]")
            }
            Self::InvalidPattern { .. } => {
                Some("Escape regex metacharacters such as '.', '(' and '[' with a backslash")
            }
            Self::InvalidExcludeGlob { .. } => Some("Use globset syntax, e.g. \"**/vendor/**\""),
            Self::TomlParse(_) => Some("Fix the syntax or run with --no-config"),
            Self::RootNotFound(_) => Some("Pass an existing directory as the scan root"),
            Self::DirectoryRead { .. } => Some("Check directory permissions"),
            Self::Config(_) | Self::FileRead { .. } => None,
        }
    }

    /// True for errors raised before traversal starts.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::TokenFileRead { .. }
                | Self::TokenFileParse { .. }
                | Self::InvalidPattern { .. }
                | Self::InvalidExcludeGlob { .. }
                | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
