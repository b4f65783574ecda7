//! Error types for depguide operations.
//!
//! This module defines [`DepguideError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DepguideError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DepguideError::Other`) for unexpected errors
//! - A failure the advisory layer does not recognise is never turned into an
//!   error; it is handed back through
//!   [`Interpretation::NotApplicable`](crate::advisory::Interpretation)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depguide operations.
#[derive(Debug, Error)]
pub enum DepguideError {
    /// A registered dependency failed its own validation.
    #[error("Dependency '{key}' is unusable: {message}")]
    DependencyUnusable { key: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The reporter could not produce a report reference.
    #[error("Could not build a report reference: {message}")]
    ReportFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for depguide operations.
pub type Result<T> = std::result::Result<T, DepguideError>;
