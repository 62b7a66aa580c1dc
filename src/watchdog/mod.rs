//! Background watchdog that restores the palette when the session ends
//!
//! Lifecycle: `Idle → Forked → Watching → {Exited, TimedOut, Signaled} → Done`.
//!
//! The foreground process detaches a worker and returns at once so the
//! invoking shell regains control. The worker blocks on the tracked
//! process's exit event with an eight-hour ceiling, resets the palette when
//! the event fires, and exits. A session outliving the ceiling is left
//! alone: by then the terminal has been closed or reused.

use crate::ansi::SchemeEmitter;
use crate::error::{Error, Result};
use crate::platform::{Branch, ExitEventSource, Platform, WaitOutcome};
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Longest time a watcher waits for the tracked process
pub const WATCH_CEILING: Duration = Duration::from_secs(8 * 60 * 60);

/// Set once the palette has been reset in this process
///
/// Shared with the signal handlers, hence a static.
pub static RESET_PERFORMED: AtomicBool = AtomicBool::new(false);

/// Watchdog lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchPhase {
    Idle,
    Forked,
    Watching,
    Exited,
    TimedOut,
    Signaled,
    Done,
}

impl WatchPhase {
    fn can_advance_to(self, next: WatchPhase) -> bool {
        use WatchPhase::*;
        matches!(
            (self, next),
            (Idle, Forked)
                | (Forked, Watching)
                | (Watching, Exited)
                | (Watching, TimedOut)
                | (Watching, Signaled)
                | (Exited, Done)
                | (TimedOut, Done)
                | (Signaled, Done)
        )
    }
}

impl fmt::Display for WatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One tracked PID plus the one-shot reset flag
#[derive(Debug)]
pub struct WatchdogState {
    tracked_pid: u32,
    phase: WatchPhase,
    reset_flag: &'static AtomicBool,
}

impl WatchdogState {
    pub fn new(tracked_pid: u32) -> Self {
        Self::with_reset_flag(tracked_pid, &RESET_PERFORMED)
    }

    /// State using a caller-owned reset flag
    pub fn with_reset_flag(tracked_pid: u32, reset_flag: &'static AtomicBool) -> Self {
        Self {
            tracked_pid,
            phase: WatchPhase::Idle,
            reset_flag,
        }
    }

    pub fn tracked_pid(&self) -> u32 {
        self.tracked_pid
    }

    pub fn phase(&self) -> WatchPhase {
        self.phase
    }

    /// Move to `next`; only forward transitions of the lifecycle are allowed
    pub fn advance(&mut self, next: WatchPhase) -> Result<()> {
        if !self.phase.can_advance_to(next) {
            return Err(Error::Other(format!(
                "invalid watchdog transition {} -> {}",
                self.phase, next
            )));
        }
        debug!("Watchdog for {}: {} -> {}", self.tracked_pid, self.phase, next);
        self.phase = next;
        Ok(())
    }

    /// Reset the palette unless that already happened; returns whether it did
    ///
    /// The reset signals stay blocked while the flag is claimed and the
    /// bytes are written. A signal arriving meanwhile is delivered afterwards
    /// and finds the reset done.
    pub fn reset_once<W: Write>(&self, emitter: &mut SchemeEmitter<W>) -> Result<bool> {
        let signals = Platform::signals();
        signals.block_reset_signals()?;
        let reset = self.claim_and_reset(emitter);
        signals.unblock_reset_signals()?;
        reset
    }

    fn claim_and_reset<W: Write>(&self, emitter: &mut SchemeEmitter<W>) -> Result<bool> {
        if self.reset_flag.swap(true, Ordering::SeqCst) {
            debug!("Scheme already reset");
            return Ok(false);
        }
        emitter.reset()?;
        Ok(true)
    }
}

/// How [`Watchdog::start`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Started {
    /// Foreground side: the watcher runs on as `watcher_pid`
    Detached { watcher_pid: u32 },
    /// Watcher side: watching finished in `phase`
    Finished { phase: WatchPhase },
}

/// Restores the palette once the tracked process is gone
#[derive(Debug)]
pub struct Watchdog {
    state: WatchdogState,
}

impl Watchdog {
    pub fn new(tracked_pid: u32) -> Self {
        Self::with_state(WatchdogState::new(tracked_pid))
    }

    pub fn with_state(state: WatchdogState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WatchdogState {
        &self.state
    }

    /// Install signal handlers, detach, and watch in the worker
    ///
    /// Returns in both processes. A setup failure in the worker comes back
    /// as [`Error::WatchdogSetupFailed`] from the worker only.
    pub fn start(mut self) -> Result<Started> {
        Platform::signals().install_reset_handlers()?;

        match Platform::process().detach()? {
            Branch::Parent { worker_pid } => {
                info!("Forked successfully, watcher is {}", worker_pid);
                Ok(Started::Detached {
                    watcher_pid: worker_pid,
                })
            }
            Branch::Worker => {
                self.state.advance(WatchPhase::Forked)?;
                let mut events = Platform::exit_events(self.state.tracked_pid())?;
                let mut emitter = SchemeEmitter::stdout();
                let phase = self.watch(events.as_mut(), WATCH_CEILING, &mut emitter)?;
                Ok(Started::Finished { phase })
            }
        }
    }

    /// Wait on `events` and reset when the tracked process exits
    pub fn watch<E, W>(
        &mut self,
        events: &mut E,
        ceiling: Duration,
        emitter: &mut SchemeEmitter<W>,
    ) -> Result<WatchPhase>
    where
        E: ExitEventSource + ?Sized,
        W: Write,
    {
        self.state.advance(WatchPhase::Watching)?;
        info!(
            "Watching {} for up to {:?}",
            self.state.tracked_pid(),
            ceiling
        );

        match events.wait_for_exit(ceiling)? {
            WaitOutcome::Exited => {
                self.state.advance(WatchPhase::Exited)?;
                info!("Process {} exited", self.state.tracked_pid());
                self.state.reset_once(emitter)?;
            }
            WaitOutcome::Interrupted => {
                self.state.advance(WatchPhase::Signaled)?;
                info!("Watch interrupted by a signal");
                self.state.reset_once(emitter)?;
            }
            WaitOutcome::TimedOut => {
                self.state.advance(WatchPhase::TimedOut)?;
                info!("Gave up watching {} after {:?}", self.state.tracked_pid(), ceiling);
            }
        }

        let finished_in = self.state.phase();
        self.state.advance(WatchPhase::Done)?;
        Ok(finished_in)
    }
}
