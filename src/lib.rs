//! osscz - switch the terminal color scheme per SSH host
//!
//! When an SSH target's effective configuration sets `TERMINAL_THEME`, osscz
//! applies that theme's colors through OSC escape sequences and leaves a
//! watchdog behind that restores the terminal's defaults once the SSH
//! session ends.
//!
//! ## Module Organization
//!
//! - [`config`] - Bypass policy (`scz.toml`) and the go/no-go decision
//! - [`ssh`] - Theme lookup in `ssh -G` output
//! - [`theme`] - Theme references, flat and TOML theme parsing, `ColorSet`
//! - [`ansi`] - OSC sequences for applying and resetting colors
//! - [`watchdog`] - Detached watcher that resets on session exit
//! - [`session`] - One invocation, end to end
//! - [`execution`] - External command execution
//! - [`platform`] - Paths, processes, signals and exit events per OS
//! - [`context`] - Environment snapshot and command runner passed to components
//! - [`logging`] - Rotating file log
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Example
//!
//! ```no_run
//! use osscz::{Context, Invocation, SchemeEmitter, Session};
//!
//! # fn main() -> osscz::Result<()> {
//! let ctx = Context::from_process();
//! let session = Session::new(&ctx, std::process::id());
//! let outcome = session.run(&Invocation::Reset, &mut SchemeEmitter::stdout())?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod config;
pub mod context;
pub mod error;
pub mod execution;
pub mod logging;
pub mod platform;
pub mod session;
pub mod ssh;
pub mod theme;
pub mod watchdog;

pub use ansi::SchemeEmitter;
pub use context::{Context, Environment};
pub use error::{Error, Result};
pub use session::{Invocation, Outcome, Session};
pub use theme::{ColorSet, ThemeReference};

/// The current version of osscz from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `osscz v0.1.0`, with `-DBG` appended in debug builds
pub fn version_line() -> String {
    let build = if cfg!(debug_assertions) { "-DBG" } else { "" };
    format!("{} v{}{}", NAME, VERSION, build)
}
