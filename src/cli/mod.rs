//! Command-line interface for validate-npm-package.
//!
//! The binary has a single job, so there are no subcommands: the
//! [`ValidateCommand`](validate::ValidateCommand) options are flattened into
//! the root [`Cli`].
//!
//! ```bash
//! validate-npm-package [PATH] [-q|--quiet] [--format text|json] [--strict] [-v|--verbose] [--config FILE]
//! ```
//!
//! # Configuration
//!
//! User defaults for `--format`, `--strict` and `--quiet` are read from the
//! file described in [`GlobalConfig`]. Flags given on the command line always
//! win.
//!
//! # Logging
//!
//! Diagnostics go through `tracing` to stderr. `--verbose` enables `debug`
//! output for this crate; otherwise `RUST_LOG` is honored and the default is
//! `warn`.

pub mod validate;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::GlobalConfig;
use validate::ValidateCommand;

/// Runtime settings derived from the command line before anything runs.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter directive for the tracing subscriber; `None` defers to `RUST_LOG`
    pub log_level: Option<String>,

    /// Config file given with `--config`
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Root command.
#[derive(Parser, Debug)]
#[command(
    name = "validate-npm-package",
    about = "Validate a package.json against the npm registry's publishing rules",
    version,
    long_about = "Checks every field npm cares about in a package.json and reports errors \
                  (the package cannot be published) and warnings (the manifest is incomplete \
                  or uses rules only tolerated for old packages)."
)]
pub struct Cli {
    #[command(flatten)]
    validate: ValidateCommand,

    /// Path to a config file
    ///
    /// Overrides `VNP_CONFIG_PATH` and the platform default location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Run the command and map the outcome onto a process exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or the manifest cannot be loaded.
    pub async fn execute(self) -> Result<ExitCode> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Derive the runtime settings from the parsed flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = self.validate.verbose.then(|| "validate_npm_package=debug".to_string());

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Run with explicit runtime settings.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn execute_with_config(self, config: CliConfig) -> Result<ExitCode> {
        let global = GlobalConfig::load_with_optional(config.config_path).await?;
        tracing::debug!("Effective config: {:?}", global);

        let results = self.validate.with_config(&global).execute().await?;
        Ok(if results.valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
}
