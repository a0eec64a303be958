//! Error formatting utilities
//!
//! Converts internal errors into clear, actionable messages for users.

use super::error::{ErrorContext, VnpError};

/// Convert any error into a user-friendly format with contextual suggestions.
///
/// The error chain is walked looking for a [`VnpError`]; I/O and JSON errors
/// that reached the top level without one get generic guidance.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(vnp_error) = error.downcast_ref::<VnpError>() {
        return create_error_context(vnp_error);
    }

    // Walk the error chain to find errors wrapped by anyhow context
    let mut current_error: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(vnp_error) = current_error.downcast_ref::<VnpError>() {
            return create_error_context(vnp_error);
        }

        match current_error.source() {
            Some(source) => current_error = source,
            None => break,
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => ErrorContext::new(VnpError::FileSystemError {
                operation: "file access".to_string(),
                path: "file path not specified in error context".to_string(),
            })
            .with_suggestion("Check file permissions and try running with appropriate privileges"),
            _ => ErrorContext::new(VnpError::Other {
                message: format!("{error:#}"),
            })
            .with_suggestion("Check that the path exists and you have the necessary permissions"),
        };
    }

    if error.downcast_ref::<serde_json::Error>().is_some() {
        return ErrorContext::new(VnpError::Other {
            message: format!("{error:#}"),
        })
        .with_suggestion("Check that package.json contains valid JSON");
    }

    ErrorContext::new(VnpError::Other {
        message: format!("{error:#}"),
    })
}

/// Create a user-friendly error context from a [`VnpError`].
#[must_use]
pub fn create_error_context(error: &VnpError) -> ErrorContext {
    match error {
        VnpError::ManifestNotFound => ErrorContext::new(VnpError::ManifestNotFound)
            .with_suggestion(
                "Run the command inside a package directory, or pass the path to a package.json explicitly",
            )
            .with_details("package.json is searched for in the current directory and its parents"),
        VnpError::ManifestParseError { file, reason } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Check the syntax in '{file}' - it must be valid JSON"))
            .with_details(format!("Failed to parse manifest file: {reason}")),
        VnpError::InvalidManifestRoot { file, .. } => {
            ErrorContext::new(error.clone()).with_suggestion(format!(
                "Wrap the fields of '{file}' in a top-level JSON object: {{ \"name\": ..., \"version\": ... }}"
            ))
        }
        VnpError::FileSystemError { operation, path } => ErrorContext::new(error.clone())
            .with_suggestion("Check that the path exists and you have the necessary permissions")
            .with_details(format!("Failed to {operation} at path: {path}")),
        VnpError::ConfigError { .. } | VnpError::TomlError(_) => ErrorContext::new(error.clone())
            .with_suggestion("Fix or remove the configuration file, or point --config at another one"),
        VnpError::ValidationFailed { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Fix the reported errors and run the validation again"),
        _ => ErrorContext::new(error.clone()),
    }
}
