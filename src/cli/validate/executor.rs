//! Validation execution and output.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::manifest::{Manifest, find_manifest_with_optional};
use crate::validation::validate;

use super::command::{OutputFormat, ValidateCommand};
use super::results::ValidationResults;

impl ValidateCommand {
    /// Locate, load and validate the manifest, then print the findings.
    ///
    /// # Returns
    ///
    /// The results that were printed. `valid` tells the caller which exit
    /// status to use; a rejected manifest is not an `Err`.
    ///
    /// # Errors
    ///
    /// Returns an error when validation could not run: no manifest was
    /// found, or it could not be read or parsed. In JSON mode a failed
    /// [`ValidationResults`] is printed before the error is returned.
    pub async fn execute(self) -> Result<ValidationResults> {
        self.execute_with_manifest_path(None).await
    }

    /// Like [`execute`](Self::execute), with a fallback manifest location.
    ///
    /// The command's own `path` takes precedence over `manifest_path`. With
    /// neither, `package.json` is searched for upward from the current
    /// directory.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn execute_with_manifest_path(
        self,
        manifest_path: Option<PathBuf>,
    ) -> Result<ValidationResults> {
        let explicit = self.path.clone().or(manifest_path);
        let manifest_path = match find_manifest_with_optional(explicit) {
            Ok(path) => path,
            Err(e) => {
                if self.output_format() == OutputFormat::Json {
                    let results = ValidationResults::failure(None, format!("{e:#}"));
                    println!("{}", serde_json::to_string_pretty(&results)?);
                }
                return Err(e);
            }
        };

        self.execute_from_path(manifest_path).await
    }

    /// Validate the manifest at exactly `manifest_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not JSON, or its root
    /// is not an object.
    pub async fn execute_from_path(self, manifest_path: PathBuf) -> Result<ValidationResults> {
        let format = self.output_format();
        if self.verbose && format == OutputFormat::Text {
            println!("Validating {}", manifest_path.display());
        }

        let manifest = match Manifest::load_async(&manifest_path).await {
            Ok(manifest) => manifest,
            Err(e) => {
                if format == OutputFormat::Json {
                    let results =
                        ValidationResults::failure(Some(&manifest_path), format!("{e:#}"));
                    println!("{}", serde_json::to_string_pretty(&results)?);
                }
                return Err(e);
            }
        };

        let verdict = validate(&manifest);
        tracing::debug!(
            "{}: {} error(s), {} warning(s)",
            manifest_path.display(),
            verdict.errors.len(),
            verdict.warnings.len()
        );

        let results = ValidationResults::from_verdict(&manifest_path, verdict, self.strict);
        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
            OutputFormat::Text => self.print_text(&manifest_path, &results),
        }

        Ok(results)
    }

    fn print_text(&self, manifest_path: &Path, results: &ValidationResults) {
        for error in &results.errors {
            eprintln!("{} {}", "error".red(), error);
        }

        if !self.quiet {
            for warning in &results.warnings {
                println!("{} {}", "warning".yellow(), warning);
            }
        }

        // Warnings alone only fail the run in strict mode
        if self.strict
            && !results.valid
            && results.valid_for_new_packages
            && results.valid_for_old_packages
        {
            eprintln!(
                "{} strict mode: {} warning(s) in {} treated as errors",
                "error".red(),
                results.warnings.len(),
                manifest_path.display()
            );
        }
    }
}
