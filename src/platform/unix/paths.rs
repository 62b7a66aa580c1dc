//! Unix path operations

use crate::context::Environment;
use crate::error::{Error, Result};
use crate::platform::traits::PathOps;
use std::path::PathBuf;

/// Ghostty's bundled resources on macOS
pub const MACOS_RESOURCE_DIR: &str = "/Applications/Ghostty.app/Contents/Resources/ghostty";
/// Ghostty's bundled resources elsewhere
pub const LINUX_RESOURCE_DIR: &str = "/usr/share/ghostty";

pub struct UnixPaths;

impl UnixPaths {
    pub fn new() -> Self {
        Self
    }
}

impl PathOps for UnixPaths {
    fn config_home(&self, env: &Environment) -> Result<PathBuf> {
        // The policy file sits directly in XDG_CONFIG_HOME or HOME, not in a subdirectory
        if let Some(xdg_config) = env.get("XDG_CONFIG_HOME") {
            Ok(PathBuf::from(xdg_config))
        } else if let Some(home) = env.get("HOME") {
            Ok(PathBuf::from(home))
        } else {
            dirs::home_dir().ok_or(Error::ConfigHomeUnknown)
        }
    }

    fn theme_resource_dir(&self, env: &Environment) -> PathBuf {
        match env.get("GHOSTTY_RESOURCES_DIR") {
            Some(dir) => PathBuf::from(dir),
            None if cfg!(target_os = "macos") => PathBuf::from(MACOS_RESOURCE_DIR),
            None => PathBuf::from(LINUX_RESOURCE_DIR),
        }
    }

    fn log_dir(&self, env: &Environment) -> PathBuf {
        PathBuf::from(env.get("TMPDIR").unwrap_or("/tmp"))
    }
}
