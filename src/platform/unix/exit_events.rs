//! Process-exit event sources
//!
//! kqueue delivers `NOTE_EXIT` for an arbitrary PID on macOS and the BSDs.
//! Other Unixes get a polling loop that probes the PID at a fixed interval;
//! exit is noticed up to one interval late.

use super::process::is_running;
use crate::error::Result;
use crate::platform::traits::{ExitEventSource, WaitOutcome};
use std::time::{Duration, Instant};

/// Interval between liveness probes
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Polling fallback for platforms without a process-exit filter
#[derive(Debug)]
pub struct PollingExitEvents {
    pid: u32,
    interval: Duration,
}

impl PollingExitEvents {
    pub fn new(pid: u32) -> Self {
        Self::with_interval(pid, POLL_INTERVAL)
    }

    pub fn with_interval(pid: u32, interval: Duration) -> Self {
        Self { pid, interval }
    }
}

impl ExitEventSource for PollingExitEvents {
    fn wait_for_exit(&mut self, ceiling: Duration) -> Result<WaitOutcome> {
        let started = Instant::now();
        loop {
            if !is_running(self.pid) {
                return Ok(WaitOutcome::Exited);
            }
            let elapsed = started.elapsed();
            if elapsed >= ceiling {
                return Ok(WaitOutcome::TimedOut);
            }
            std::thread::sleep(self.interval.min(ceiling - elapsed));
        }
    }
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub use self::kqueue::KqueueExitEvents;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
mod kqueue {
    use crate::error::{Error, Result};
    use crate::platform::traits::{ExitEventSource, WaitOutcome};
    use nix::errno::Errno;
    use nix::libc;
    use nix::sys::event::{EvFlags, EventFilter, FilterFlag, KEvent, Kqueue};
    use std::time::Duration;

    /// kqueue with an `EVFILT_PROC`/`NOTE_EXIT` filter registered for one PID
    pub struct KqueueExitEvents {
        kq: Kqueue,
        pid: u32,
    }

    impl KqueueExitEvents {
        /// Acquire a kqueue and register the exit filter
        pub fn register(pid: u32) -> Result<Self> {
            let kq = Kqueue::new().map_err(|e| Error::WatchdogSetupFailed {
                reason: format!("failed to acquire kqueue: {}", e),
            })?;
            let change = exit_filter(pid, EvFlags::EV_ADD | EvFlags::EV_ONESHOT);
            kq.kevent(&[change], &mut [], None)
                .map_err(|e| Error::WatchdogSetupFailed {
                    reason: format!("failed to register exit filter for {}: {}", pid, e),
                })?;
            debug!("Registered NOTE_EXIT filter for {}", pid);
            Ok(Self { kq, pid })
        }
    }

    impl ExitEventSource for KqueueExitEvents {
        fn wait_for_exit(&mut self, ceiling: Duration) -> Result<WaitOutcome> {
            let timeout = libc::timespec {
                tv_sec: ceiling.as_secs() as libc::time_t,
                tv_nsec: ceiling.subsec_nanos() as libc::c_long,
            };
            let mut events = [exit_filter(self.pid, EvFlags::empty())];
            match self.kq.kevent(&[], &mut events, Some(timeout)) {
                Ok(0) => Ok(WaitOutcome::TimedOut),
                Ok(_) => Ok(WaitOutcome::Exited),
                Err(Errno::EINTR) => Ok(WaitOutcome::Interrupted),
                Err(e) => Err(Error::WatchdogSetupFailed {
                    reason: format!("waiting on kqueue failed: {}", e),
                }),
            }
        }
    }

    fn exit_filter(pid: u32, flags: EvFlags) -> KEvent {
        KEvent::new(
            pid as usize,
            EventFilter::EVFILT_PROC,
            flags,
            FilterFlag::NOTE_EXIT,
            0,
            0,
        )
    }
}
