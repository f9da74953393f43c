use std::path::{Path, PathBuf};

use crate::config::mock_fs::MockFileSystem;
use crate::error::AuditError;

use super::*;

#[test]
fn missing_local_config_yields_defaults() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load(Path::new("/project")).unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn discovers_local_config_in_root() {
    let content = r#"
[scan]
extra_extensions = ["ts"]
exclude = ["**/vendor/**"]
"#;
    let fs = MockFileSystem::new().with_file("/project/.brand-audit.toml", content);
    let loader = FileConfigLoader::with_fs(fs);
    let result = loader.load(Path::new("/project")).unwrap();

    assert_eq!(result.config.scan.extra_extensions, vec!["ts"]);
    assert_eq!(result.config.scan.exclude, vec!["**/vendor/**"]);
    assert_eq!(
        result.source,
        Some(PathBuf::from("/project/.brand-audit.toml"))
    );
}

#[test]
fn relative_token_file_resolves_against_config_dir() {
    let content = r#"
[tokens]
file = "audit/tokens.json"
"#;
    let fs = MockFileSystem::new().with_file("/project/.brand-audit.toml", content);
    let loader = FileConfigLoader::with_fs(fs);
    let result = loader.load(Path::new("/project")).unwrap();

    assert_eq!(
        result.config.tokens.file,
        Some(PathBuf::from("/project/audit/tokens.json"))
    );
}

#[test]
fn absolute_token_file_is_kept() {
    let content = r#"
[tokens]
file = "/shared/tokens.json"
"#;
    let fs = MockFileSystem::new().with_file("/etc/audit.toml", content);
    let loader = FileConfigLoader::with_fs(fs);
    let result = loader.load_from_path(Path::new("/etc/audit.toml")).unwrap();

    assert_eq!(
        result.config.tokens.file,
        Some(PathBuf::from("/shared/tokens.json"))
    );
}

#[test]
fn explicit_missing_path_is_an_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/project/custom.toml"))
        .unwrap_err();

    assert!(matches!(err, AuditError::Config(_)));
    assert!(err.to_string().contains("custom.toml"));
}

#[test]
fn invalid_toml_is_an_error() {
    let fs = MockFileSystem::new().with_file("/project/.brand-audit.toml", "not toml [[[");
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load(Path::new("/project")).unwrap_err();

    assert!(matches!(err, AuditError::TomlParse(_)));
    assert!(err.is_config_error());
}

#[test]
fn unknown_keys_are_rejected() {
    let fs = MockFileSystem::new().with_file(
        "/project/.brand-audit.toml",
        "[scan]\nextensions = [\"ts\"]\n",
    );
    let loader = FileConfigLoader::with_fs(fs);
    let err = loader.load(Path::new("/project")).unwrap_err();

    assert!(matches!(err, AuditError::TomlParse(_)));
}
