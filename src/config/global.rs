//! User-wide defaults for the command line.
//!
//! The file is optional. When present it is TOML:
//!
//! ```toml
//! # Default output format: "text" or "json"
//! format = "json"
//! # Treat warnings as errors
//! strict = true
//! # Never print warnings in text mode
//! quiet = false
//! ```
//!
//! # Location
//!
//! Resolved in this order:
//! 1. `--config <FILE>`
//! 2. the `VNP_CONFIG_PATH` environment variable
//! 3. `<config dir>/validate-npm-package/config.toml`, where the config dir is
//!    the platform's (`~/.config` on Linux, `~/Library/Application Support` on
//!    macOS, `%APPDATA%` on Windows)
//!
//! A missing file is not an error; the defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::cli::validate::OutputFormat;
use crate::core::VnpError;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "VNP_CONFIG_PATH";

/// Directory name used under the platform config directory.
const CONFIG_DIR_NAME: &str = "validate-npm-package";

/// Persistent defaults for the `validate-npm-package` command.
///
/// Every key is optional; command-line flags always win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Output format used when `--format` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Treat warnings as errors
    pub strict: bool,

    /// Suppress warnings in text output
    pub quiet: bool,
}

impl GlobalConfig {
    /// Load from an explicit path, falling back to the default location.
    ///
    /// An explicit path must exist; the default location may be missing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit path was given and does not exist
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML or unknown keys
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            if !fs::try_exists(&path).await.unwrap_or(false) {
                return Err(VnpError::ConfigError {
                    message: format!("config file {} does not exist", path.display()),
                }
                .into());
            }
            return Self::load_from(&path).await;
        }

        let Some(path) = Self::default_path() else {
            tracing::debug!("No config directory available, using default configuration");
            return Ok(Self::default());
        };

        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load the config from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub async fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());

        let content = fs::read_to_string(path)
            .await
            .map_err(|_| VnpError::FileSystemError {
                operation: "read config".to_string(),
                path: path.display().to_string(),
            })
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| VnpError::ConfigError {
                message: format!("{}: {}", path.display(), e.message()),
            })
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// The config path used when `--config` is not given.
    ///
    /// `VNP_CONFIG_PATH` wins if set and non-empty. `None` when the platform
    /// has no config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
    }
}
