//! Platform abstraction layer
//!
//! This module provides a unified interface for platform-specific operations
//! (paths, processes, signals and process-exit events).

mod traits;
#[cfg(unix)]
mod unix;

pub use traits::*;
#[cfg(unix)]
pub use unix::PollingExitEvents;
#[cfg(all(unix, test))]
pub(crate) use unix::run_in_child;

#[cfg(not(unix))]
compile_error!("Unsupported platform");

/// Platform implementation factory
pub struct Platform;

impl Platform {
    /// Get the platform-specific path operations
    pub fn paths() -> Box<dyn PathOps> {
        Box::new(unix::UnixPaths::new())
    }

    /// Get the platform-specific process operations
    pub fn process() -> Box<dyn ProcessOps> {
        Box::new(unix::UnixProcess::new())
    }

    /// Get the platform-specific signal operations
    pub fn signals() -> Box<dyn SignalOps> {
        Box::new(unix::UnixSignals::new())
    }

    /// Get an exit-event source for `pid`
    ///
    /// Uses kqueue where the kernel offers it and falls back to polling
    /// elsewhere.
    pub fn exit_events(pid: u32) -> crate::error::Result<Box<dyn ExitEventSource>> {
        #[cfg(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "netbsd",
            target_os = "openbsd",
            target_os = "dragonfly"
        ))]
        {
            Ok(Box::new(unix::KqueueExitEvents::register(pid)?))
        }

        #[cfg(not(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "netbsd",
            target_os = "openbsd",
            target_os = "dragonfly"
        )))]
        {
            Ok(Box::new(unix::PollingExitEvents::new(pid)))
        }
    }
}
