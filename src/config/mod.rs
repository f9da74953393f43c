mod filesystem;
mod loader;
mod model;

#[cfg(test)]
pub(crate) mod mock_fs;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{Config, ScanConfig, TokensConfig};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
