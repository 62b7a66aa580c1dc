//! One osscz invocation from target to applied colors
//!
//! `caller → ConfigResolver → locate_theme → ThemeParser → SchemeEmitter`.
//! Starting the watchdog is left to the caller because it forks.

use crate::ansi::SchemeEmitter;
use crate::config::ConfigResolver;
use crate::context::Context;
use crate::error::Result;
use crate::ssh::locate_theme;
use crate::theme::{ThemeParser, ThemeReference};
use std::io::Write;

/// Arguments that force a reset instead of a theme lookup
pub const RESET_TOKENS: [&str; 2] = ["RESET-SCHEME", "RESET-THEME"];

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Restore default colors, nothing else
    Reset,
    /// Apply the theme configured for this SSH target
    Host(Vec<String>),
}

impl Invocation {
    pub fn from_target(target: &str) -> Self {
        if RESET_TOKENS.contains(&target) {
            Invocation::Reset
        } else {
            Invocation::Host(vec![target.to_string()])
        }
    }
}

/// How an invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Default colors restored
    Reset,
    /// A bypass pattern matched the parent command line
    Bypassed { pattern: String },
    /// The target declares no theme
    NoTheme,
    /// A theme was declared but nothing could be applied
    Skipped { reference: ThemeReference },
    /// Colors applied; the watchdog should track `tracked_pid`
    Applied {
        reference: ThemeReference,
        tracked_pid: u32,
    },
}

/// Runs an invocation for the process that spawned us
pub struct Session<'a> {
    ctx: &'a Context,
    parent_pid: u32,
}

impl<'a> Session<'a> {
    pub fn new(ctx: &'a Context, parent_pid: u32) -> Self {
        Self { ctx, parent_pid }
    }

    pub fn run<W: Write>(
        &self,
        invocation: &Invocation,
        emitter: &mut SchemeEmitter<W>,
    ) -> Result<Outcome> {
        match invocation {
            Invocation::Reset => {
                emitter.reset()?;
                Ok(Outcome::Reset)
            }
            Invocation::Host(target_args) => self.switch_for_host(target_args, emitter),
        }
    }

    fn switch_for_host<W: Write>(
        &self,
        target_args: &[String],
        emitter: &mut SchemeEmitter<W>,
    ) -> Result<Outcome> {
        if let Some(pattern) = ConfigResolver::new(self.ctx).matching_bypass(self.parent_pid)? {
            return Ok(Outcome::Bypassed { pattern });
        }

        let Some(reference) = locate_theme(self.ctx, target_args)? else {
            return Ok(Outcome::NoTheme);
        };

        let colors = match ThemeParser::new(self.ctx).parse(&reference) {
            Ok(colors) => colors,
            Err(e) if e.is_theme_error() => {
                error!("Skipping theme '{}': {}", reference, e);
                return Ok(Outcome::Skipped { reference });
            }
            Err(e) => return Err(e),
        };
        if colors.is_empty() {
            info!("Theme '{}' has no colors to apply", reference);
            return Ok(Outcome::Skipped { reference });
        }

        emitter.apply(&colors)?;
        Ok(Outcome::Applied {
            reference,
            tracked_pid: self.parent_pid,
        })
    }
}
