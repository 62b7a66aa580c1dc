//! Unix-specific platform implementations

mod exit_events;
mod paths;
mod process;
mod signals;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub use exit_events::KqueueExitEvents;
pub use exit_events::PollingExitEvents;
pub use paths::UnixPaths;
pub use process::UnixProcess;
pub use signals::UnixSignals;

#[cfg(test)]
pub(crate) use signals::run_in_child;
