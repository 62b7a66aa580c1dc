//! Structured TOML themes
//!
//! ```toml
//! [colors]
//! ansi = ["#1d1f21", "#cc6666", ...]
//! brights = ["#969896", "#cc6666", ...]
//! foreground = "#c5c8c6"
//! background = "#1d1f21"
//! cursor_fg = "#c5c8c6"
//! ```
//!
//! `compose_cursor` is accepted in place of `cursor_fg`.

use super::expand::expand;
use super::{ColorSet, BRIGHT_OFFSET, PALETTE_SIZE};
use crate::context::Environment;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
struct StructuredTheme {
    colors: Option<StructuredColors>,
}

#[derive(Debug, Deserialize)]
struct StructuredColors {
    ansi: Option<Vec<String>>,
    brights: Option<Vec<String>>,
    foreground: Option<String>,
    background: Option<String>,
    cursor_fg: Option<String>,
    compose_cursor: Option<String>,
}

/// Expand `reference`, then read and parse the file it names
pub fn load(env: &Environment, reference: &str) -> Result<ColorSet> {
    let path = expand(env, reference);
    info!("Theme file '{}'", path);
    let content = fs::read_to_string(&path).map_err(|e| {
        debug!("Cannot read '{}': {}", path, e);
        Error::ThemeNotFound {
            theme_name: path.clone(),
        }
    })?;
    parse(&content, &path)
}

/// Parse structured theme text; `theme_name` only labels errors
pub fn parse(content: &str, theme_name: &str) -> Result<ColorSet> {
    let invalid = |reason: String| Error::ThemeFormatInvalid {
        theme_name: theme_name.to_string(),
        reason,
    };
    let missing = |field: &str| invalid(format!("missing colors.{}", field));

    let theme: StructuredTheme = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let colors = theme.colors.ok_or_else(|| invalid("missing [colors] table".to_string()))?;

    let ansi = colors.ansi.ok_or_else(|| missing("ansi"))?;
    let brights = colors.brights.ok_or_else(|| missing("brights"))?;
    let foreground = colors.foreground.ok_or_else(|| missing("foreground"))?;
    let background = colors.background.ok_or_else(|| missing("background"))?;

    let mut set = ColorSet::new();
    if ansi.len() > PALETTE_SIZE {
        debug!("Dropping {} ansi entries past {}", ansi.len() - PALETTE_SIZE, PALETTE_SIZE);
    }
    for (index, color) in ansi.into_iter().take(PALETTE_SIZE).enumerate() {
        set.set_ansi(index, color);
    }
    for (index, color) in brights
        .into_iter()
        .take(PALETTE_SIZE - BRIGHT_OFFSET)
        .enumerate()
    {
        set.set_ansi(BRIGHT_OFFSET + index, color);
    }
    set.set_foreground(&foreground);
    set.set_background(&background);

    match colors.cursor_fg.or(colors.compose_cursor) {
        Some(cursor) => set.set_cursor(&cursor),
        None => info!("No cursor color in '{}'", theme_name),
    }

    Ok(set)
}
