//! Unit Tests for the Theme Locator
//!
//! Finding `setenv TERMINAL_THEME` in `ssh -G` output.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use osscz::ssh::{locate_theme, EffectiveConfig};
use osscz::theme::ThemeKind;
use osscz::ThemeReference;
use test_utils::{Fixture, ScriptedRunner};

const SSH_G_OUTPUT: &str = "\
host prod
user deploy
hostname 10.0.0.5
port 22
setenv TERMINAL_THEME=Builtin Solarized Dark
forwardagent no
";

#[test]
fn test_value_after_first_equals_is_kept_verbatim() {
    let config = EffectiveConfig::from_text("    setenv TERMINAL_THEME = /path/to/x.toml\n");
    let reference = config.theme_reference().unwrap();

    assert_eq!(reference.raw(), " /path/to/x.toml");
    assert_eq!(reference.name(), "/path/to/x.toml");
    assert_eq!(reference.kind(), ThemeKind::Structured);
}

#[test]
fn test_value_may_contain_equals() {
    let config = EffectiveConfig::from_text("setenv TERMINAL_THEME=a=b\n");
    assert_eq!(config.theme_reference(), Some(ThemeReference::new("a=b")));
}

#[test]
fn test_line_without_equals_is_skipped() {
    let config =
        EffectiveConfig::from_text("setenv TERMINAL_THEME\nsetenv TERMINAL_THEME=nord\n");
    assert_eq!(config.theme_reference(), Some(ThemeReference::new("nord")));
}

#[test]
fn test_indented_comment_is_skipped() {
    let config = EffectiveConfig::from_text("   # setenv TERMINAL_THEME=old\n");
    assert_eq!(config.theme_reference(), None);
}

#[test]
fn test_locate_queries_ssh() {
    let fixture = Fixture::new();
    let runner = ScriptedRunner::new().respond("ssh -G", SSH_G_OUTPUT);
    let calls = runner.calls();
    let ctx = fixture.context(runner);

    let reference = locate_theme(&ctx, &["deploy@prod".to_string()]).unwrap();

    assert_eq!(
        reference,
        Some(ThemeReference::new("Builtin Solarized Dark"))
    );
    assert_eq!(*calls.borrow(), vec!["ssh -G deploy@prod".to_string()]);
}

#[test]
fn test_locate_without_marker() {
    let fixture = Fixture::new();
    let ctx = fixture.context(ScriptedRunner::new().respond("ssh -G", "user me\nport 22\n"));

    assert_eq!(locate_theme(&ctx, &["plain".to_string()]).unwrap(), None);
}

#[test]
fn test_locate_with_no_output() {
    let fixture = Fixture::new();
    let ctx = fixture.context(ScriptedRunner::new());

    assert_eq!(locate_theme(&ctx, &["unknown".to_string()]).unwrap(), None);
}
