//! The package manifest (`package.json`) as seen by the validators.
//!
//! A [`Manifest`] is a read-only view over the top-level JSON object of a
//! `package.json` file. Nothing about its fields is assumed: every field is an
//! arbitrary [`serde_json::Value`], and the validators decide what shapes are
//! acceptable.
//!
//! Field lookup goes through [`Manifest::get`], which distinguishes a missing
//! key ([`FieldValue::Absent`]) from a key that is present with any value,
//! including `null` ([`FieldValue::Present`]).
//!
//! # Examples
//!
//! ```rust
//! use validate_npm_package::manifest::{FieldValue, Manifest};
//!
//! let manifest = Manifest::from_json_str(r#"{ "name": "left-pad", "private": null }"#)?;
//!
//! assert!(matches!(manifest.get("name"), FieldValue::Present(_)));
//! assert!(matches!(manifest.get("private"), FieldValue::Present(_)));
//! assert!(manifest.get("version").is_absent());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod helpers;

pub use helpers::{find_manifest, find_manifest_from, find_manifest_with_optional};

use crate::core::VnpError;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// File name searched for during manifest discovery.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// The value of one manifest field, or its absence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The key does not occur in the manifest.
    Absent,
    /// The key occurs, with this value (which may be `null`).
    Present(&'a Value),
}

impl<'a> FieldValue<'a> {
    /// Returns `true` when the key does not occur in the manifest.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The present value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&'a Value> {
        match *self {
            Self::Absent => None,
            Self::Present(value) => Some(value),
        }
    }
}

impl<'a> From<Option<&'a Value>> for FieldValue<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }
}

/// A parsed `package.json` document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Create an empty manifest (`{}`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`VnpError::InvalidManifestRoot`] if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, VnpError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(VnpError::InvalidManifestRoot {
                file: "<memory>".to_string(),
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    /// Parse a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or its root is not an object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let value: Value = serde_json::from_str(content).map_err(VnpError::from)?;
        Ok(Self::from_value(value)?)
    }

    /// Load and parse a manifest from a file.
    ///
    /// # Errors
    ///
    /// - [`VnpError::FileSystemError`] if the file cannot be read
    /// - [`VnpError::ManifestParseError`] if it is not valid JSON
    /// - [`VnpError::InvalidManifestRoot`] if the JSON root is not an object
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading manifest from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|_| VnpError::FileSystemError {
                operation: "read manifest".to_string(),
                path: path.display().to_string(),
            })
            .with_context(|| format!("Cannot read manifest file: {}", path.display()))?;

        Self::parse_document(path, &content)
    }

    /// Async variant of [`Manifest::load`] reading through `tokio::fs`.
    ///
    /// # Errors
    ///
    /// Same as [`Manifest::load`].
    pub async fn load_async(path: &Path) -> Result<Self> {
        tracing::debug!("Loading manifest from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|_| VnpError::FileSystemError {
                operation: "read manifest".to_string(),
                path: path.display().to_string(),
            })
            .with_context(|| format!("Cannot read manifest file: {}", path.display()))?;

        Self::parse_document(path, &content)
    }

    fn parse_document(path: &Path, content: &str) -> Result<Self> {
        // Editors on Windows like to save package.json with a byte order mark
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let value: Value =
            serde_json::from_str(content).map_err(|e| VnpError::ManifestParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        match value {
            Value::Object(fields) => {
                tracing::debug!(
                    "Manifest {} has {} top-level field(s)",
                    path.display(),
                    fields.len()
                );
                Ok(Self { fields })
            }
            other => Err(VnpError::InvalidManifestRoot {
                file: path.display().to_string(),
                found: json_type_name(&other).to_string(),
            }
            .into()),
        }
    }

    /// Look up a field, distinguishing absence from any present value.
    #[must_use]
    pub fn get(&self, field: &str) -> FieldValue<'_> {
        self.fields.get(field).into()
    }

}

impl From<Map<String, Value>> for Manifest {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for Manifest {
    type Error = VnpError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Human readable name of a JSON value's type, as used in messages.
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
