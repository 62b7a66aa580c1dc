//! Configuration for osscz
//!
//! The only persisted configuration is the bypass policy in `scz.toml`.
//! [`ConfigResolver`] combines it with the invoking parent process's command
//! line to decide whether a color switch should happen at all.

pub mod loader;

pub use loader::{policy_path, BypassPolicy, POLICY_FILE_NAME};

use crate::context::Context;
use crate::error::Result;
use crate::execution::command_line_for_pid;
use crate::platform::Platform;
use std::path::PathBuf;

/// Decides go/no-go for a color switch
pub struct ConfigResolver<'a> {
    ctx: &'a Context,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Location of `scz.toml` for this context
    pub fn policy_path(&self) -> Result<PathBuf> {
        let config_home = Platform::paths().config_home(self.ctx.env())?;
        Ok(policy_path(&config_home))
    }

    /// Load the bypass policy; a missing or malformed file is an error
    pub fn load_policy(&self) -> Result<BypassPolicy> {
        BypassPolicy::load_from(&self.policy_path()?)
    }

    /// Bypass pattern matching the parent's command line, if any
    pub fn matching_bypass(&self, parent_pid: u32) -> Result<Option<String>> {
        let command_line = command_line_for_pid(self.ctx.runner(), parent_pid)?;
        info!("Parent, {}, command line: '{}'", parent_pid, command_line);

        let policy = self.load_policy()?;
        match policy.first_match(&command_line) {
            Some(pattern) => {
                info!("Matched bypass '{}'", pattern);
                Ok(Some(pattern.to_string()))
            }
            None => {
                info!("None of the bypasses matched");
                Ok(None)
            }
        }
    }

    /// Whether the scheme should be switched for this parent process
    pub fn should_apply(&self, parent_pid: u32) -> Result<bool> {
        Ok(self.matching_bypass(parent_pid)?.is_none())
    }
}
