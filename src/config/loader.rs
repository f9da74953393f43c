use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};

use super::{Config, FileSystem, RealFileSystem};

/// Name of the configuration file discovered in the scan root.
pub const LOCAL_CONFIG_NAME: &str = ".brand-audit.toml";

/// Result of loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// The loaded configuration, with relative paths resolved.
    pub config: Config,
    /// The file the configuration came from, if any.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load `.brand-audit.toml` from `root`, or defaults when it is absent.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self, root: &Path) -> Result<LoadResult>;

    /// Load configuration from a specific path, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub struct FileConfigLoader<Fs: FileSystem = RealFileSystem> {
    fs: Fs,
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Fs: FileSystem> FileConfigLoader<Fs> {
    pub const fn with_fs(fs: Fs) -> Self {
        Self { fs }
    }

    fn parse(content: &str, path: &Path) -> Result<Config> {
        let mut config: Config = toml::from_str(content)?;

        if let Some(file) = config.tokens.file.take() {
            let resolved = if file.is_relative() {
                path.parent().map_or_else(|| file.clone(), |dir| dir.join(&file))
            } else {
                file
            };
            config.tokens.file = Some(resolved);
        }

        Ok(config)
    }
}

impl<Fs: FileSystem> ConfigLoader for FileConfigLoader<Fs> {
    fn load(&self, root: &Path) -> Result<LoadResult> {
        let path = root.join(LOCAL_CONFIG_NAME);
        if !self.fs.exists(&path) {
            return Ok(LoadResult {
                config: Config::default(),
                source: None,
            });
        }
        self.load_from_path(&path)
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.fs.read_to_string(path).map_err(|e| {
            AuditError::Config(format!(
                "cannot read configuration file '{}': {e}",
                path.display()
            ))
        })?;

        Ok(LoadResult {
            config: Self::parse(&content, path)?,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
