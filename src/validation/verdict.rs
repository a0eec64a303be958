//! The aggregate validation result.

use serde::{Deserialize, Serialize};

use super::outcome::FieldOutcome;
use crate::core::VnpError;

/// Result of validating one manifest.
///
/// Both flags start `true` and only ever move to `false` as outcomes are
/// merged. Warnings and errors keep the order in which the registry produced
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Acceptable for publishing under current registry rules
    pub valid_for_new_packages: bool,
    /// Acceptable under the rules tolerated for already-published packages
    pub valid_for_old_packages: bool,
    /// Soft findings
    pub warnings: Vec<String>,
    /// Hard findings
    pub errors: Vec<String>,
}

impl Default for Verdict {
    fn default() -> Self {
        Self {
            valid_for_new_packages: true,
            valid_for_old_packages: true,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl Verdict {
    /// A verdict with no findings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one field outcome into the verdict.
    pub fn merge(&mut self, outcome: FieldOutcome) {
        match outcome {
            FieldOutcome::Valid => {}
            FieldOutcome::Warning(message) => self.warnings.push(message),
            FieldOutcome::Invalid { message, affects_new, affects_old } => {
                if affects_new {
                    self.valid_for_new_packages = false;
                }
                if affects_old {
                    self.valid_for_old_packages = false;
                }
                self.errors.push(message);
            }
            FieldOutcome::Checked(report) => {
                if !report.valid_for_new_packages {
                    self.valid_for_new_packages = false;
                }
                if !report.valid_for_old_packages {
                    self.valid_for_old_packages = false;
                }
                self.warnings.extend(report.warnings);
                self.errors.extend(report.errors);
            }
        }
    }

    /// Acceptable under both rule sets.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid_for_new_packages && self.valid_for_old_packages
    }

    /// `true` if any warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Turn the verdict into a `Result` for callers that treat rejection as
    /// failure. `strict` also rejects verdicts carrying warnings.
    ///
    /// # Errors
    ///
    /// Returns [`VnpError::ValidationFailed`] with the message counts.
    pub fn ensure_valid(&self, strict: bool) -> Result<(), VnpError> {
        if self.is_valid() && !(strict && self.has_warnings()) {
            return Ok(());
        }
        Err(VnpError::ValidationFailed {
            errors: self.errors.len(),
            warnings: self.warnings.len(),
        })
    }
}
