//! Bypass policy loading
//!
//! The policy lives in `scz.toml` directly under the configuration home:
//!
//! ```toml
//! bypasses = ["tmux", "code( |$)"]
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the policy file under the configuration home
pub const POLICY_FILE_NAME: &str = "scz.toml";

#[derive(Debug, Deserialize)]
struct PolicyFile {
    bypasses: Vec<String>,
}

/// Ordered list of compiled bypass patterns
#[derive(Debug, Clone)]
pub struct BypassPolicy {
    patterns: Vec<Regex>,
}

impl BypassPolicy {
    /// Compile a policy from pattern strings
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .enumerate()
            .map(|(index, pattern)| {
                Regex::new(pattern.as_ref()).map_err(|e| Error::ConfigValidationFailed {
                    field: format!("bypasses[{}]", index),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Parse policy text as found in `scz.toml`
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let file: PolicyFile = toml::from_str(content).map_err(|e| Error::ConfigParseFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::new(file.bypasses)
    }

    /// Load the policy file at `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let policy = Self::from_toml_str(&content, path)?;
        debug!(
            "Loaded {} bypass pattern(s) from {}",
            policy.patterns.len(),
            path.display()
        );
        Ok(policy)
    }

    /// First pattern, in listed order, that matches `command_line`
    pub fn first_match(&self, command_line: &str) -> Option<&str> {
        self.patterns.iter().find_map(|pattern| {
            trace!("Checking against '{}'", pattern.as_str());
            pattern
                .is_match(command_line)
                .then(|| pattern.as_str())
        })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Path of the policy file under `config_home`
pub fn policy_path(config_home: &Path) -> PathBuf {
    config_home.join(POLICY_FILE_NAME)
}
