use std::path::Path;

use thiserror::Error;

/// Error types for the nowplaying crate.
///
/// Covers configuration loading and validation. Media pipeline failures
/// use [`crate::services::media::MediaError`] and never leave the service.
#[derive(Error, Debug)]
pub enum NowPlayingError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// Configuration field missing or invalid
    #[error("invalid config field '{field}' in {component}: {reason}")]
    InvalidConfigField {
        /// The field that is invalid
        field: String,
        /// Component containing the field
        component: String,
        /// Reason why the field is invalid
        reason: String,
    },

    /// I/O error on a known path
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: std::path::PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type defaulting to [`NowPlayingError`].
pub type Result<T> = std::result::Result<T, NowPlayingError>;

impl NowPlayingError {
    /// Creates a TOML parsing error with optional file path context.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => p.display().to_string(),
            None => "string".to_string(),
        };

        NowPlayingError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }
}
