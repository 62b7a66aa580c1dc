//! Unit Tests for Flat Themes
//!
//! Parsing `key = value` theme files and resolving them inside the
//! resource directory.

use osscz::theme::flat::{load, parse, theme_path, to_flat_theme};
use osscz::{ColorSet, Environment, Error};
use std::path::PathBuf;
use tempfile::TempDir;

const SULPHURPOOL: &str = "\
palette = 0=#202746
palette = 1=#c94922
palette = 2=#ac9739
palette = 3=#c08b30
palette = 4=#3d8fd1
palette = 5=#6679cc
palette = 6=#22a2c9
palette = 7=#979db4
palette = 8=#6b7394
palette = 9=#c76b29
palette = 10=#293256
palette = 11=#5e6687
palette = 12=#898ea4
palette = 13=#dfe2f1
palette = 14=#9c637a
palette = 15=#f5f7ff
background = 202746
foreground = 979db4
cursor-color = 979db4
selection-background = 5e6687
selection-foreground = 979db4
";

#[test]
fn test_full_theme() {
    let colors = parse(SULPHURPOOL);

    assert_eq!(colors.palette().count(), 16);
    assert_eq!(colors.ansi(0), Some("#202746"));
    assert_eq!(colors.ansi(15), Some("#f5f7ff"));
    assert_eq!(colors.background(), Some("#202746"));
    assert_eq!(colors.foreground(), Some("#979db4"));
    assert_eq!(colors.cursor(), Some("#979db4"));
}

#[test]
fn test_whitespace_around_separators() {
    let colors = parse("   palette=3=#c08b30\nforeground   =   #ffffff\n");
    assert_eq!(colors.ansi(3), Some("#c08b30"));
    assert_eq!(colors.foreground(), Some("#ffffff"));
}

#[test]
fn test_trailing_whitespace_on_named_colors() {
    let colors = parse("background = 202746 \nforeground = #979db4\t\ncursor-color =  c94922  \n");
    assert_eq!(colors.background(), Some("#202746"));
    assert_eq!(colors.foreground(), Some("#979db4"));
    assert_eq!(colors.cursor(), Some("#c94922"));
}

#[test]
fn test_comments_and_junk_are_skipped() {
    let colors = parse("# palette = 0=#000000\nnot a setting\n\npalette = 99=#ffffff\npalette = x=#ffffff\nbackground =\n");
    assert!(colors.is_empty());
}

#[test]
fn test_later_lines_override() {
    let colors = parse("background = #111111\nbackground = #222222\n");
    assert_eq!(colors.background(), Some("#222222"));
}

#[test]
fn test_palette_entries_kept_verbatim() {
    let colors = parse("palette = 4=3d8fd1\n");
    assert_eq!(colors.ansi(4), Some("3d8fd1"));
}

#[test]
fn test_serialize_and_parse_again() {
    let mut colors = ColorSet::new();
    colors.set_ansi(2, "#00ff00");
    colors.set_ansi(12, "#0000ff");
    colors.set_background("#101010");
    colors.set_cursor("#fafafa");

    assert_eq!(parse(&to_flat_theme(&colors)), colors);
}

#[test]
fn test_theme_path_uses_resource_dir() {
    let env = Environment::from_pairs([("GHOSTTY_RESOURCES_DIR", "/opt/ghostty")]);
    assert_eq!(
        theme_path(&env, "Builtin Dark"),
        PathBuf::from("/opt/ghostty/themes/Builtin Dark")
    );
}

#[test]
#[cfg(not(target_os = "macos"))]
fn test_theme_path_default_resource_dir() {
    assert_eq!(
        theme_path(&Environment::default(), "nord"),
        PathBuf::from("/usr/share/ghostty/themes/nord")
    );
}

#[test]
fn test_load_installed_theme() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("themes")).unwrap();
    std::fs::write(temp_dir.path().join("themes").join("Sulphurpool"), SULPHURPOOL).unwrap();
    let env = Environment::from_pairs([(
        "GHOSTTY_RESOURCES_DIR",
        temp_dir.path().to_string_lossy().into_owned(),
    )]);

    let colors = load(&env, "Sulphurpool").unwrap();
    assert_eq!(colors, parse(SULPHURPOOL));
}

#[test]
fn test_load_missing_theme() {
    let temp_dir = TempDir::new().unwrap();
    let env = Environment::from_pairs([(
        "GHOSTTY_RESOURCES_DIR",
        temp_dir.path().to_string_lossy().into_owned(),
    )]);

    let err = load(&env, "Nope").unwrap_err();
    assert!(matches!(err, Error::ThemeNotFound { .. }));
}
