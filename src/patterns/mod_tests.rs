use std::path::Path;

use crate::config::mock_fs::MockFileSystem;
use crate::error::AuditError;

use super::*;

#[test]
fn builtin_patterns_all_compile() {
    let set = PatternSet::builtin();
    assert_eq!(set.len(), DEFAULT_TOKENS.len());
    assert_eq!(set.origin(), &PatternOrigin::Builtin);
}

#[test]
fn builtin_order_is_preserved() {
    let set = PatternSet::builtin();
    let sources: Vec<_> = set.patterns().iter().map(Pattern::source).collect();
    assert_eq!(sources, DEFAULT_TOKENS);
}

#[test]
fn pattern_is_case_insensitive() {
    let pattern = Pattern::new(r"island\s*drains").unwrap();
    let found: Vec<_> = pattern.find_iter("ISLAND DRAINS and Island  Drains").collect();
    assert_eq!(found, vec!["ISLAND DRAINS", "Island  Drains"]);
}

#[test]
fn pattern_finds_every_occurrence() {
    let pattern = Pattern::new("#0C4A6E").unwrap();
    let found: Vec<_> = pattern
        .find_iter("color: #0c4a6e; border: #0C4A6E; fill: #0C4a6E")
        .collect();
    assert_eq!(found.len(), 3);
}

#[test]
fn pattern_skips_empty_matches() {
    let pattern = Pattern::new("x*").unwrap();
    let found: Vec<_> = pattern.find_iter("abc xx d").collect();
    assert_eq!(found, vec!["xx"]);
}

#[test]
fn phone_pattern_accepts_separator_styles() {
    let pattern = Pattern::new(DEFAULT_TOKENS[6]).unwrap();
    for line in ["250-818-5611", "250.818.5611", "250 818 5611", "2508185611"] {
        assert_eq!(pattern.find_iter(line).count(), 1, "{line}");
    }
    assert_eq!(pattern.find_iter("250_818_5611").count(), 0);
}

#[test]
fn word_boundary_pattern_ignores_embedded_text() {
    let pattern = Pattern::new(r"\bide\b").unwrap();
    assert_eq!(pattern.find_iter("the IDE logo").count(), 1);
    assert_eq!(pattern.find_iter("provide guidance").count(), 0);
}

#[test]
fn from_json_preserves_order() {
    let set =
        PatternSet::from_json(r#"["beta", "alpha\\s+co", "gamma"]"#, Path::new("t.json")).unwrap();
    let sources: Vec<_> = set.patterns().iter().map(Pattern::source).collect();
    assert_eq!(sources, vec!["beta", r"alpha\s+co", "gamma"]);
    assert_eq!(
        set.origin(),
        &PatternOrigin::TokenFile(Path::new("t.json").to_path_buf())
    );
}

#[test]
fn from_json_rejects_malformed_payload() {
    let err = PatternSet::from_json("{not json", Path::new("bad.json")).unwrap_err();
    assert!(matches!(err, AuditError::TokenFileParse { .. }));
}

#[test]
fn from_json_rejects_non_string_entries() {
    let err = PatternSet::from_json(r#"["ok", 42]"#, Path::new("bad.json")).unwrap_err();
    assert!(matches!(err, AuditError::TokenFileParse { .. }));
}

#[test]
fn from_json_rejects_empty_array() {
    let err = PatternSet::from_json("[]", Path::new("empty.json")).unwrap_err();
    assert!(matches!(err, AuditError::Config(_)));
}

#[test]
fn first_invalid_entry_is_reported() {
    let err = PatternSet::from_json(r#"["fine", "(broken", "[also"]"#, Path::new("t.json"))
        .unwrap_err();
    match err {
        AuditError::InvalidPattern { index, pattern, .. } => {
            assert_eq!(index, 1);
            assert_eq!(pattern, "(broken");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn load_without_path_uses_builtin() {
    let fs = MockFileSystem::new();
    let set = load_patterns_with_fs(&fs, None).unwrap();
    assert_eq!(set.origin(), &PatternOrigin::Builtin);
}

#[test]
fn load_from_token_file() {
    let fs = MockFileSystem::new().with_file("/project/tokens.json", r#"["acme\\s*corp"]"#);
    let set = load_patterns_with_fs(&fs, Some(Path::new("/project/tokens.json"))).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.patterns()[0].source(), r"acme\s*corp");
}

#[test]
fn missing_token_file_does_not_fall_back() {
    let fs = MockFileSystem::new();
    let err = load_patterns_with_fs(&fs, Some(Path::new("/project/missing.json"))).unwrap_err();
    assert!(matches!(err, AuditError::TokenFileRead { .. }));
    assert!(err.is_config_error());
}
