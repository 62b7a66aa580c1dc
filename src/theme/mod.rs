//! Theme references, color sets and format dispatch
//!
//! A theme is named either by a bare flat-theme name, resolved inside the
//! terminal's resource directory, or by a path ending in `.toml`. Both
//! formats normalize into a [`ColorSet`].

pub mod expand;
pub mod flat;
pub mod structured;

use crate::context::Context;
use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Number of ANSI palette slots (8 normal + 8 bright)
pub const PALETTE_SIZE: usize = 16;

/// Index of the first bright palette slot
pub const BRIGHT_OFFSET: usize = 8;

/// Which parser a theme reference dispatches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    /// TOML file with a `colors` table
    Structured,
    /// `key = value` file under the resource directory
    Flat,
}

/// Theme identifier as written in the SSH configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeReference {
    raw: String,
}

impl ThemeReference {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Text exactly as found after the `=`
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Reference with surrounding whitespace removed, used for lookups
    pub fn name(&self) -> &str {
        self.raw.trim()
    }

    /// Classify purely by suffix
    pub fn kind(&self) -> ThemeKind {
        let is_toml = Path::new(self.name())
            .extension()
            .is_some_and(|ext| ext == "toml");
        if is_toml {
            ThemeKind::Structured
        } else {
            ThemeKind::Flat
        }
    }
}

impl fmt::Display for ThemeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized colors, independent of the theme format they came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorSet {
    ansi: [Option<String>; PALETTE_SIZE],
    foreground: Option<String>,
    background: Option<String>,
    cursor: Option<String>,
}

impl ColorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a palette slot; returns `false` when `index` is out of range
    pub fn set_ansi(&mut self, index: usize, color: impl Into<String>) -> bool {
        match self.ansi.get_mut(index) {
            Some(slot) => {
                *slot = Some(color.into());
                true
            }
            None => false,
        }
    }

    pub fn ansi(&self, index: usize) -> Option<&str> {
        self.ansi.get(index).and_then(|c| c.as_deref())
    }

    /// Populated palette slots in index order
    pub fn palette(&self) -> impl Iterator<Item = (usize, &str)> {
        self.ansi
            .iter()
            .enumerate()
            .filter_map(|(index, color)| color.as_deref().map(|c| (index, c)))
    }

    pub fn set_foreground(&mut self, color: &str) {
        self.foreground = Some(normalize_named_color(color));
    }

    pub fn set_background(&mut self, color: &str) {
        self.background = Some(normalize_named_color(color));
    }

    pub fn set_cursor(&mut self, color: &str) {
        self.cursor = Some(normalize_named_color(color));
    }

    pub fn foreground(&self) -> Option<&str> {
        self.foreground.as_deref()
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Nothing to apply
    pub fn is_empty(&self) -> bool {
        self.ansi.iter().all(Option::is_none)
            && self.foreground.is_none()
            && self.background.is_none()
            && self.cursor.is_none()
    }
}

/// Give bare hex digits (`202746`) a leading `#`; anything else is kept as is
pub fn normalize_named_color(color: &str) -> String {
    let is_bare_hex = matches!(color.len(), 3 | 6 | 9 | 12)
        && color.chars().all(|c| c.is_ascii_hexdigit());
    if is_bare_hex {
        format!("#{}", color)
    } else {
        color.to_string()
    }
}

/// Dispatches a theme reference to its format parser
pub struct ThemeParser<'a> {
    ctx: &'a Context,
}

impl<'a> ThemeParser<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Parse the referenced theme
    ///
    /// An unreadable theme yields an empty [`ColorSet`]; the host may name a
    /// theme that is not installed on this machine. A structured theme that
    /// lacks required fields is an error.
    pub fn parse(&self, reference: &ThemeReference) -> Result<ColorSet> {
        let kind = reference.kind();
        info!("Theme '{}' is {:?}", reference, kind);
        let parsed = match kind {
            ThemeKind::Structured => structured::load(self.ctx.env(), reference.name()),
            ThemeKind::Flat => flat::load(self.ctx.env(), reference.name()),
        };
        match parsed {
            Err(Error::ThemeNotFound { theme_name }) => {
                warn!("Theme file '{}' not readable, applying nothing", theme_name);
                Ok(ColorSet::default())
            }
            other => other,
        }
    }
}
