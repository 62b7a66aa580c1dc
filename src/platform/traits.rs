//! Platform-specific operation traits
//!
//! These traits define the interface for platform-specific operations,
//! allowing for clean abstraction and easier testing.

use crate::context::Environment;
use crate::error::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Platform-specific path operations
pub trait PathOps {
    /// Directory holding `scz.toml` (`$XDG_CONFIG_HOME`, else `$HOME`)
    fn config_home(&self, env: &Environment) -> Result<PathBuf>;

    /// Root of the terminal's bundled resources (flat themes live under `themes/`)
    fn theme_resource_dir(&self, env: &Environment) -> PathBuf;

    /// Directory for the log file
    fn log_dir(&self, env: &Environment) -> PathBuf;
}

/// Which side of a detach the caller is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Original process; `worker_pid` carries on in the background
    Parent { worker_pid: u32 },
    /// Detached background worker
    Worker,
}

/// Platform-specific process operations
pub trait ProcessOps {
    /// PID of the process that invoked us
    fn parent_pid(&self) -> u32;

    /// Split into a foreground branch and a detached background worker
    fn detach(&self) -> Result<Branch>;
}

/// Platform-specific signal operations
pub trait SignalOps {
    /// Make interrupt and broken-pipe signals reset the color scheme
    fn install_reset_handlers(&self) -> Result<()>;

    /// Hold back the reset signals for the calling thread
    fn block_reset_signals(&self) -> Result<()>;

    /// Deliver any reset signal held back by [`SignalOps::block_reset_signals`]
    fn unblock_reset_signals(&self) -> Result<()>;
}

/// Result of waiting for a tracked process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The tracked process exited
    Exited,
    /// The ceiling elapsed first
    TimedOut,
    /// The wait was cut short by a signal
    Interrupted,
}

/// Source of "process exited" events for one tracked PID
pub trait ExitEventSource {
    /// Block until the tracked process exits or `ceiling` elapses
    fn wait_for_exit(&mut self, ceiling: Duration) -> Result<WaitOutcome>;
}
