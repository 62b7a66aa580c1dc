//! Error types and Result aliases for osscz

use std::path::PathBuf;

/// Result type alias for osscz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for osscz
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Command errors ===
    /// Failed to spawn an external command
    #[error("Failed to spawn command '{command}': {reason}")]
    CommandSpawnFailed { command: String, reason: String },

    // === Configuration errors ===
    /// Bypass policy file does not exist or cannot be read
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigNotFound { path: PathBuf, reason: String },

    /// Bypass policy file is not valid TOML or lacks a required key
    #[error("Failed to parse config '{}': {reason}", path.display())]
    ConfigParseFailed { path: PathBuf, reason: String },

    /// Configuration value is present but unusable
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Could not work out where the configuration lives
    #[error("Could not determine configuration directory")]
    ConfigHomeUnknown,

    // === Theme errors ===
    /// Theme file is missing or unreadable
    #[error("Theme '{theme_name}' not found")]
    ThemeNotFound { theme_name: String },

    /// Structured theme lacks a required field or is malformed
    #[error("Theme '{theme_name}' is invalid: {reason}")]
    ThemeFormatInvalid { theme_name: String, reason: String },

    // === Watchdog errors ===
    /// Exit-event source could not be set up
    #[error("Failed to set up process watchdog: {reason}")]
    WatchdogSetupFailed { reason: String },

    // === I/O errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl Error {
    /// Whether this error only affects cosmetic output and should not fail
    /// the whole invocation
    pub fn is_theme_error(&self) -> bool {
        matches!(
            self,
            Error::ThemeNotFound { .. } | Error::ThemeFormatInvalid { .. }
        )
    }
}

impl From<nix::Error> for Error {
    fn from(err: nix::Error) -> Self {
        Error::Io(std::io::Error::from(err))
    }
}
