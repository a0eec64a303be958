//! Command structure and output format definitions for validation.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::GlobalConfig;

/// Validate a `package.json` against the npm registry's publishing rules.
///
/// # Examples
///
/// ```rust,ignore
/// use validate_npm_package::cli::validate::{OutputFormat, ValidateCommand};
///
/// // CI usage: machine readable, warnings fail the build
/// let cmd = ValidateCommand {
///     path: Some("packages/core".into()),
///     quiet: true,
///     format: Some(OutputFormat::Json),
///     strict: true,
///     verbose: false,
/// };
/// ```
#[derive(Args, Debug, Clone, Default)]
pub struct ValidateCommand {
    /// Manifest file or package directory to validate
    ///
    /// A directory starts the upward search for `package.json` there. If not
    /// provided, the search starts in the current directory.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Only output errors, ignore warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format: text or json
    ///
    /// Defaults to the configured format, or `text`.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Strict mode (treat warnings as errors)
    ///
    /// Any warning makes the command exit with a non-zero status.
    #[arg(long)]
    pub strict: bool,

    /// Verbose output
    ///
    /// Shows which manifest is validated and enables debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ValidateCommand {
    /// Fill in whatever the command line left unset from the user config.
    ///
    /// Boolean switches can only be turned on by the config, never off.
    #[must_use]
    pub fn with_config(mut self, config: &GlobalConfig) -> Self {
        self.quiet |= config.quiet;
        self.strict |= config.strict;
        if self.format.is_none() {
            self.format = config.format;
        }
        self
    }

    /// The effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Output format options for validation results.
///
/// - [`Text`](OutputFormat::Text): colored `error`/`warning` lines
/// - [`Json`](OutputFormat::Json): one [`ValidationResults`](super::ValidationResults) object
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output; errors on stderr, warnings on stdout.
    #[default]
    Text,

    /// Structured JSON output for automation, on stdout.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_fills_unset_options() {
        let config = GlobalConfig {
            format: Some(OutputFormat::Json),
            strict: true,
            quiet: true,
        };
        let cmd = ValidateCommand::default().with_config(&config);
        assert_eq!(cmd.output_format(), OutputFormat::Json);
        assert!(cmd.strict);
        assert!(cmd.quiet);
    }

    #[test]
    fn test_flags_win_over_config() {
        let config = GlobalConfig {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let cmd = ValidateCommand {
            format: Some(OutputFormat::Text),
            strict: true,
            ..Default::default()
        }
        .with_config(&config);
        assert_eq!(cmd.output_format(), OutputFormat::Text);
        assert!(cmd.strict);
        assert!(!cmd.quiet);
    }

    #[test]
    fn test_default_format_is_text() {
        assert_eq!(ValidateCommand::default().output_format(), OutputFormat::Text);
    }
}
