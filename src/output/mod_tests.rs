use super::*;

#[test]
fn always_and_never_ignore_terminal() {
    assert!(ColorMode::Always.use_colors(false));
    assert!(!ColorMode::Never.use_colors(true));
}

#[test]
fn auto_requires_terminal() {
    assert!(!ColorMode::Auto.use_colors(false));
}

#[test]
fn default_mode_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}
