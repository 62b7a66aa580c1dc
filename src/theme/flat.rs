//! Flat `key = value` theme files
//!
//! Sample lines:
//!
//! ```text
//! palette = 15=#f5f7ff
//! background = 202746
//! cursor-color = #c94922
//! ```
//!
//! Only `palette`, `foreground`, `background` and `cursor-color` are used;
//! other keys belong to settings this tool does not apply.

use super::{ColorSet, PALETTE_SIZE};
use crate::context::Environment;
use crate::error::{Error, Result};
use crate::platform::Platform;
use std::fs;
use std::path::PathBuf;

const PALETTE: &str = "palette";
const FOREGROUND: &str = "foreground";
const BACKGROUND: &str = "background";
const CURSOR_COLOR: &str = "cursor-color";

/// Location of a flat theme inside the resource directory
pub fn theme_path(env: &Environment, name: &str) -> PathBuf {
    Platform::paths()
        .theme_resource_dir(env)
        .join("themes")
        .join(name)
}

/// Read and parse a flat theme by name
pub fn load(env: &Environment, name: &str) -> Result<ColorSet> {
    let path = theme_path(env, name);
    info!("Theme file '{}'", path.display());
    let content = fs::read_to_string(&path).map_err(|e| {
        debug!("Cannot read '{}': {}", path.display(), e);
        Error::ThemeNotFound {
            theme_name: path.display().to_string(),
        }
    })?;
    Ok(parse(&content))
}

/// Parse flat theme text; malformed or unknown lines are skipped
pub fn parse(content: &str) -> ColorSet {
    let mut colors = ColorSet::new();

    for line in content.lines() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim_end();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key {
            PALETTE => match parse_palette_entry(value) {
                Some((index, color)) => {
                    colors.set_ansi(index, color);
                }
                None => debug!("Ignoring palette entry '{}'", value),
            },
            FOREGROUND => colors.set_foreground(value),
            BACKGROUND => colors.set_background(value),
            CURSOR_COLOR => colors.set_cursor(value),
            _ => trace!("Ignoring setting '{}'", key),
        }
    }

    colors
}

/// `15=#f5f7ff` into `(15, "#f5f7ff")`
fn parse_palette_entry(value: &str) -> Option<(usize, &str)> {
    let (index, color) = value.split_once('=')?;
    let index = index.trim().parse::<usize>().ok()?;
    let color = color.trim();
    (index < PALETTE_SIZE && !color.is_empty()).then_some((index, color))
}

/// Serialize a color set back into the flat format
pub fn to_flat_theme(colors: &ColorSet) -> String {
    let mut out = String::new();
    for (index, color) in colors.palette() {
        out.push_str(&format!("{} = {}={}\n", PALETTE, index, color));
    }
    let named = [
        (BACKGROUND, colors.background()),
        (FOREGROUND, colors.foreground()),
        (CURSOR_COLOR, colors.cursor()),
    ];
    for (key, color) in named {
        if let Some(color) = color {
            out.push_str(&format!("{} = {}\n", key, color));
        }
    }
    out
}
