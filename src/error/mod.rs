// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cmlint application.
//!
//! Configuration problems are fatal and surface at load time, before any
//! message is evaluated. Rule violations are never errors at this level;
//! they are carried in verdicts and only mapped to an exit code at the end.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum CmlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Lint run finished with blocking failures (errors, or warnings in
    // strict mode)
    #[error("Lint failed: {count} message(s) failed")]
    LintFailed { count: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown severity level: '{value}' (expected 0-2 or disabled/warning/error)")]
    UnknownSeverity { value: String },

    #[error("Unknown rule applicability: '{value}' (expected always or never)")]
    UnknownApplicability { value: String },
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, CmlintError>;
