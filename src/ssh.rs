//! Theme lookup in the effective SSH configuration
//!
//! `ssh -G` prints the configuration the client would use for a target,
//! with includes, host patterns and `Match` blocks already applied, without
//! connecting. A host opts in with a line such as:
//!
//! ```text
//! Host prod-*
//!     SetEnv TERMINAL_THEME=Builtin Solarized Dark
//! ```

use crate::context::Context;
use crate::error::Result;
use crate::execution::shell_quote;
use crate::theme::ThemeReference;

/// Name of the environment variable carrying the theme
pub const THEME_MARKER: &str = "TERMINAL_THEME";

/// Resolved client configuration for one target, one directive per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    lines: Vec<String>,
}

impl EffectiveConfig {
    /// Query `ssh -G` for `target_args`
    pub fn query(ctx: &Context, target_args: &[String]) -> Result<Self> {
        let args: Vec<String> = target_args.iter().map(|a| shell_quote(a)).collect();
        let output = ctx.runner().run(&format!("ssh -G {}", args.join(" ")))?;
        Ok(Self::from_text(&output))
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Value of the first active `setenv TERMINAL_THEME` line
    ///
    /// The value is everything after the first `=` on that line, untrimmed.
    pub fn theme_reference(&self) -> Option<ThemeReference> {
        let marker = format!("setenv {}", THEME_MARKER);
        self.lines
            .iter()
            .map(|line| line.trim_start())
            .filter(|line| !line.starts_with('#') && line.contains(&marker))
            .find_map(|line| {
                let (_, value) = line.split_once('=')?;
                info!("{} found: '{}'", THEME_MARKER, value);
                Some(ThemeReference::new(value))
            })
    }
}

/// Theme configured for `target_args`, if any
pub fn locate_theme(ctx: &Context, target_args: &[String]) -> Result<Option<ThemeReference>> {
    info!("Scanning SSH config for {}", THEME_MARKER);
    let reference = EffectiveConfig::query(ctx, target_args)?.theme_reference();
    if reference.is_none() {
        info!("No {} found for '{}'", THEME_MARKER, target_args.join(" "));
    }
    Ok(reference)
}
