use std::path::PathBuf;

/// Error types for the Glance library.
///
/// This enum encompasses all possible errors that can occur while loading
/// configuration and gathering system information for display.
#[derive(Debug, thiserror::Error)]
pub enum GlanceError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file exists but could not be parsed.
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A configuration file was explicitly requested but does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Error gathering information for one probe.
    ///
    /// The `domain` field indicates which probe failed
    /// (e.g., "cpu", "memory", "disk").
    #[error("Probe error in {domain}: {message}")]
    Probe {
        domain: &'static str,
        message: String,
    },
}

/// Convenience Result type for Glance operations.
pub type Result<T> = std::result::Result<T, GlanceError>;
