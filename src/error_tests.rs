use std::path::PathBuf;

use super::*;

fn io_error() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found")
}

#[test]
fn error_display_config() {
    let err = AuditError::Config("token list is empty".to_string());
    assert_eq!(err.to_string(), "Configuration error: token list is empty");
}

#[test]
fn error_display_token_file_read() {
    let err = AuditError::TokenFileRead {
        path: PathBuf::from("tokens.json"),
        source: io_error(),
    };
    assert!(err.to_string().contains("tokens.json"));
    assert_eq!(err.detail().as_deref(), Some("file not found"));
}

#[test]
fn error_display_token_file_parse() {
    let source = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
    let err = AuditError::TokenFileParse {
        path: PathBuf::from("bad.json"),
        source,
    };
    assert!(err.to_string().contains("bad.json"));
    assert!(err.detail().is_some());
    assert!(err.suggestion().unwrap().contains("JSON array"));
}

#[test]
fn invalid_pattern_names_index_and_source() {
    let source = regex::Regex::new("(unclosed").unwrap_err();
    let err = AuditError::InvalidPattern {
        index: 3,
        pattern: "(unclosed".to_string(),
        source,
    };
    assert_eq!(err.to_string(), "Invalid token pattern #3: (unclosed");
    assert!(err.message().contains("token #3"));
    assert!(!err.detail().unwrap().is_empty());
}

#[test]
fn invalid_exclude_glob_display() {
    let source = globset::Glob::new("[invalid").unwrap_err();
    let err = AuditError::InvalidExcludeGlob {
        pattern: "[invalid".to_string(),
        source,
    };
    assert!(err.to_string().contains("[invalid"));
    assert!(err.message().contains("[invalid"));
}

#[test]
fn root_not_found_display() {
    let err = AuditError::RootNotFound(PathBuf::from("missing/dir"));
    assert!(err.to_string().contains("missing"));
    assert!(err.suggestion().is_some());
}

#[test]
fn error_type_groups_variants() {
    assert_eq!(AuditError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        AuditError::RootNotFound(PathBuf::from("x")).error_type(),
        "Audit"
    );
    assert_eq!(
        AuditError::FileRead {
            path: PathBuf::from("a.md"),
            source: io_error(),
        }
        .error_type(),
        "IO"
    );
}

#[test]
fn config_errors_are_flagged() {
    assert!(AuditError::Config("x".to_string()).is_config_error());
    assert!(
        AuditError::TokenFileRead {
            path: PathBuf::from("t.json"),
            source: io_error(),
        }
        .is_config_error()
    );
    assert!(!AuditError::RootNotFound(PathBuf::from("x")).is_config_error());
    assert!(
        !AuditError::FileRead {
            path: PathBuf::from("a.md"),
            source: io_error(),
        }
        .is_config_error()
    );
}
