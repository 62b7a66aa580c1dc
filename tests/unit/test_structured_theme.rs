//! Unit Tests for Structured Themes

use osscz::context::Context;
use osscz::execution::ShellRunner;
use osscz::theme::structured::{load, parse};
use osscz::theme::ThemeParser;
use osscz::{Environment, Error, ThemeReference};
use tempfile::TempDir;

fn hex(n: usize) -> String {
    format!("\"#{:06x}\"", n)
}

fn theme_with(ansi_len: usize, brights_len: usize) -> String {
    let ansi: Vec<String> = (0..ansi_len).map(hex).collect();
    let brights: Vec<String> = (0..brights_len).map(|n| hex(0xff0000 + n)).collect();
    format!(
        "[colors]\nansi = [{}]\nbrights = [{}]\nforeground = \"#eeeeee\"\nbackground = \"#111111\"\n",
        ansi.join(", "),
        brights.join(", ")
    )
}

#[test]
fn test_excess_ansi_entries_ignored() {
    let colors = parse(&theme_with(20, 0), "wide.toml").unwrap();
    let indices: Vec<usize> = colors.palette().map(|(index, _)| index).collect();
    assert_eq!(indices, (0..16).collect::<Vec<_>>());
    assert_eq!(colors.ansi(15), Some("#00000f"));
}

#[test]
fn test_brights_fill_upper_half() {
    let colors = parse(&theme_with(8, 8), "t.toml").unwrap();
    assert_eq!(colors.ansi(7), Some("#000007"));
    assert_eq!(colors.ansi(8), Some("#ff0000"));
    assert_eq!(colors.ansi(15), Some("#ff0007"));
}

#[test]
fn test_extra_brights_ignored() {
    let colors = parse(&theme_with(8, 12), "t.toml").unwrap();
    assert_eq!(colors.palette().count(), 16);
    assert_eq!(colors.ansi(15), Some("#ff0007"));
}

#[test]
fn test_short_palettes() {
    let colors = parse(&theme_with(3, 2), "t.toml").unwrap();
    let indices: Vec<usize> = colors.palette().map(|(index, _)| index).collect();
    assert_eq!(indices, vec![0, 1, 2, 8, 9]);
    assert_eq!(colors.cursor(), None);
}

#[test]
fn test_named_colors_get_hash_prefix() {
    let content = theme_with(0, 0).replace("\"#eeeeee\"", "\"eeeeee\"");
    let colors = parse(&content, "t.toml").unwrap();
    assert_eq!(colors.foreground(), Some("#eeeeee"));
}

#[test]
fn test_missing_colors_table() {
    let err = parse("title = \"nothing here\"\n", "t.toml").unwrap_err();
    assert!(matches!(err, Error::ThemeFormatInvalid { .. }));
}

#[test]
fn test_load_unset_variable_expands_to_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dark.toml");
    std::fs::write(&path, theme_with(8, 8)).unwrap();
    let reference = format!("$UNSET_DIR{}", path.display());

    let colors = load(&Environment::default(), &reference).unwrap();
    assert_eq!(colors.background(), Some("#111111"));
}

#[test]
fn test_parser_dispatches_on_suffix() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("dark.toml"), theme_with(8, 8)).unwrap();
    let env = Environment::from_pairs([(
        "THEMES",
        temp_dir.path().to_string_lossy().into_owned(),
    )]);
    let ctx = Context::new(env, Box::new(ShellRunner::new()));

    let colors = ThemeParser::new(&ctx)
        .parse(&ThemeReference::new(" $THEMES/dark.toml"))
        .unwrap();
    assert_eq!(colors.palette().count(), 16);
}

#[test]
fn test_parser_treats_missing_file_as_empty() {
    let ctx = Context::new(Environment::default(), Box::new(ShellRunner::new()));
    let colors = ThemeParser::new(&ctx)
        .parse(&ThemeReference::new("/nonexistent/dark.toml"))
        .unwrap();
    assert!(colors.is_empty());
}

#[test]
fn test_parser_reports_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    std::fs::write(&path, "[colors]\nansi = []\n").unwrap();
    let ctx = Context::new(Environment::default(), Box::new(ShellRunner::new()));

    let err = ThemeParser::new(&ctx)
        .parse(&ThemeReference::new(path.to_string_lossy()))
        .unwrap_err();
    assert!(err.is_theme_error());
}
