//! Unix signal operations

use crate::ansi::RESET_SEQUENCE;
use crate::error::{Error, Result};
use crate::platform::traits::SignalOps;
use crate::watchdog::RESET_PERFORMED;
use nix::libc;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal as NixSignal};
use std::sync::atomic::Ordering;

const RESET_SIGNALS: [NixSignal; 2] = [NixSignal::SIGINT, NixSignal::SIGPIPE];

pub struct UnixSignals;

impl UnixSignals {
    pub fn new() -> Self {
        Self
    }
}

impl SignalOps for UnixSignals {
    fn install_reset_handlers(&self) -> Result<()> {
        let action = SigAction::new(
            SigHandler::Handler(handle_reset_signal),
            SaFlags::empty(),
            SigSet::empty(),
        );
        for signal in RESET_SIGNALS {
            // SAFETY: the handler only touches an atomic and calls write/_exit,
            // all async-signal-safe.
            unsafe { sigaction(signal, &action) }.map_err(|e| Error::WatchdogSetupFailed {
                reason: format!("sigaction({}) failed: {}", signal, e),
            })?;
            debug!("Installed reset handler for {}", signal);
        }
        Ok(())
    }

    fn block_reset_signals(&self) -> Result<()> {
        reset_signal_set().thread_block()?;
        Ok(())
    }

    fn unblock_reset_signals(&self) -> Result<()> {
        reset_signal_set().thread_unblock()?;
        Ok(())
    }
}

fn reset_signal_set() -> SigSet {
    let mut set = SigSet::empty();
    for signal in RESET_SIGNALS {
        set.add(signal);
    }
    set
}

extern "C" fn handle_reset_signal(signal: libc::c_int) {
    if !RESET_PERFORMED.swap(true, Ordering::SeqCst) {
        let bytes = RESET_SEQUENCE.as_bytes();
        let mut written = 0;
        while written < bytes.len() {
            // SAFETY: pointer and length come from a live static slice
            let n = unsafe {
                libc::write(
                    libc::STDOUT_FILENO,
                    bytes[written..].as_ptr().cast(),
                    bytes.len() - written,
                )
            };
            if n <= 0 {
                break;
            }
            written += n as usize;
        }
    }
    // SAFETY: _exit is async-signal-safe and skips non-reentrant teardown
    unsafe { libc::_exit(128 + signal) }
}

/// Run `f` in a forked child whose stdout goes to a scratch file
///
/// Returns the child's wait status and everything it wrote to stdout.
#[cfg(test)]
pub(crate) fn run_in_child<F: FnOnce()>(f: F) -> (nix::sys::wait::WaitStatus, Vec<u8>) {
    use nix::sys::wait::waitpid;
    use nix::unistd::{fork, ForkResult};
    use std::io::{Read, Seek, SeekFrom};
    use std::os::fd::AsRawFd;

    let mut out = tempfile::tempfile().unwrap();
    match unsafe { fork() }.unwrap() {
        ForkResult::Child => {
            let status = unsafe {
                if libc::dup2(out.as_raw_fd(), libc::STDOUT_FILENO) < 0 {
                    libc::_exit(99);
                }
                match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
                    Ok(()) => 0,
                    Err(_) => 101,
                }
            };
            unsafe { libc::_exit(status) }
        }
        ForkResult::Parent { child } => {
            let status = waitpid(child, None).unwrap();
            let mut bytes = Vec::new();
            out.seek(SeekFrom::Start(0)).unwrap();
            out.read_to_end(&mut bytes).unwrap();
            (status, bytes)
        }
    }
}
