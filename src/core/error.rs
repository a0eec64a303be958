//! Error handling for validate-npm-package
//!
//! Two kinds of failure exist in this crate and they are kept strictly apart:
//!
//! 1. **Manifest problems** (a field has the wrong shape, a version does not
//!    parse, a license expression is unknown). These are *data*: they end up in
//!    the [`Verdict`](crate::validation::Verdict) as warning and error strings
//!    and are never represented by the types in this module.
//! 2. **Operational failures** (no `package.json` could be found, the file is
//!    unreadable or not JSON, the configuration file is broken). These are
//!    represented by [`VnpError`] and surfaced to the user through
//!    [`ErrorContext`].
//!
//! # Error Conversion and Context
//!
//! Common library errors are converted automatically:
//! - [`std::io::Error`] → [`VnpError::IoError`]
//! - [`serde_json::Error`] → [`VnpError::JsonError`]
//! - [`toml::de::Error`] → [`VnpError::TomlError`]
//!
//! Use [`user_friendly_error`] to turn any [`anyhow::Error`] into a colored,
//! actionable message for the terminal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use validate_npm_package::core::{VnpError, ErrorContext};
//!
//! let context = ErrorContext::new(VnpError::ManifestNotFound)
//!     .with_suggestion("Pass the path to a package.json explicitly")
//!     .with_details("package.json is searched for in the current and parent directories");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

pub use super::error_formatting::{create_error_context, user_friendly_error};

/// The main error type for operational failures.
///
/// Manifest content problems are never reported through this type; see the
/// module documentation.
#[derive(Error, Debug)]
pub enum VnpError {
    /// No `package.json` was found while walking up from the start directory.
    #[error("Manifest file package.json not found in current directory or any parent directory")]
    ManifestNotFound,

    /// The manifest file exists but is not valid JSON.
    #[error("Invalid manifest file syntax in {file}")]
    ManifestParseError {
        /// Path to the manifest that failed to parse
        file: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The manifest parsed, but its top-level value is not a JSON object.
    #[error("Manifest {file} must contain a JSON object, found {found}")]
    InvalidManifestRoot {
        /// Path to the offending manifest
        file: String,
        /// Human readable JSON type of the root value
        found: String,
    },

    /// A file system operation failed.
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// What was being attempted ("read manifest", "read config", ...)
        operation: String,
        /// The path involved
        path: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// The manifest was read and validated, and the verdict rejects it.
    ///
    /// Used by callers that want a `Result` rather than a verdict; the CLI
    /// itself maps verdicts onto exit codes directly.
    #[error("Manifest is not valid for publishing ({errors} error(s), {warnings} warning(s))")]
    ValidationFailed {
        /// Number of error entries in the verdict
        errors: usize,
        /// Number of warning entries in the verdict
        warnings: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for VnpError {
    fn clone(&self) -> Self {
        match self {
            Self::ManifestNotFound => Self::ManifestNotFound,
            Self::ManifestParseError { file, reason } => Self::ManifestParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::InvalidManifestRoot { file, found } => Self::InvalidManifestRoot {
                file: file.clone(),
                found: found.clone(),
            },
            Self::FileSystemError { operation, path } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::ConfigError { message } => Self::ConfigError {
                message: message.clone(),
            },
            Self::ValidationFailed { errors, warnings } => Self::ValidationFailed {
                errors: *errors,
                warnings: *warnings,
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other { message } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that adds user-facing details and a suggestion.
///
/// Details are printed in yellow, suggestions in green, below the red error
/// line.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: VnpError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: VnpError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}
