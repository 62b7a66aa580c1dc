//! Unix process operations

use crate::error::{Error, Result};
use crate::platform::traits::{Branch, ProcessOps};
use nix::errno::Errno;
use nix::sys::signal::kill;
use nix::unistd::{fork, getppid, setsid, ForkResult, Pid};

pub struct UnixProcess;

impl UnixProcess {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessOps for UnixProcess {
    fn parent_pid(&self) -> u32 {
        getppid().as_raw() as u32
    }

    fn detach(&self) -> Result<Branch> {
        // SAFETY: osscz is single-threaded when it detaches, so the child
        // may keep running ordinary Rust code after fork.
        match unsafe { fork() } {
            Ok(ForkResult::Parent { child }) => Ok(Branch::Parent {
                worker_pid: child.as_raw() as u32,
            }),
            Ok(ForkResult::Child) => {
                // Leave the invoking shell's process group
                if let Err(e) = setsid() {
                    warn!("setsid failed in watcher: {}", e);
                }
                Ok(Branch::Worker)
            }
            Err(e) => Err(Error::WatchdogSetupFailed {
                reason: format!("fork failed: {}", e),
            }),
        }
    }
}

/// Signal 0 probe; EPERM still means the process exists
pub(crate) fn is_running(pid: u32) -> bool {
    match kill(Pid::from_raw(pid as i32), None) {
        Ok(()) => true,
        Err(Errno::EPERM) => true,
        Err(_) => false,
    }
}
