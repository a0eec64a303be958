//! Per-field validation outcomes.

use serde::{Deserialize, Serialize};

/// The result of running one field validator.
///
/// Validators may answer tersely: a bare error message converts into
/// [`FieldOutcome::Invalid`] affecting both package generations, and a
/// [`CheckReport`] from one of the external checkers converts into
/// [`FieldOutcome::Checked`]. [`Verdict::merge`](super::Verdict::merge) is the
/// single place where outcomes are folded into the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// No finding.
    Valid,
    /// The field is acceptable but worth flagging (usually: it is missing).
    Warning(String),
    /// The field is unacceptable.
    Invalid {
        /// Message appended to the verdict's errors
        message: String,
        /// Clears `valid_for_new_packages`
        affects_new: bool,
        /// Clears `valid_for_old_packages`
        affects_old: bool,
    },
    /// A structured report from an external checker, merged as-is.
    Checked(CheckReport),
}

impl FieldOutcome {
    /// An error that disqualifies the manifest under both rule sets.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
            affects_new: true,
            affects_old: true,
        }
    }

    /// A warning that never affects acceptability.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning(message.into())
    }

    /// `true` for [`FieldOutcome::Valid`] and for checker reports with no
    /// findings at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        match self {
            Self::Valid => true,
            Self::Checked(report) => report.is_clean(),
            Self::Warning(_) | Self::Invalid { .. } => false,
        }
    }
}

impl From<String> for FieldOutcome {
    fn from(message: String) -> Self {
        Self::invalid(message)
    }
}

impl From<&str> for FieldOutcome {
    fn from(message: &str) -> Self {
        Self::invalid(message)
    }
}

impl From<CheckReport> for FieldOutcome {
    fn from(report: CheckReport) -> Self {
        Self::Checked(report)
    }
}

/// Verdict-shaped result returned by the package-name and license checkers.
///
/// A `false` flag clears the corresponding verdict flag when merged. Checkers
/// may clear a flag through warnings alone: legacy-only naming problems are
/// reported as warnings while still making the name unacceptable for new
/// packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// Acceptable under current registry rules
    pub valid_for_new_packages: bool,
    /// Acceptable under legacy registry rules
    pub valid_for_old_packages: bool,
    /// Soft findings, in the order the checker produced them
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Hard findings, in the order the checker produced them
    #[serde(default)]
    pub errors: Vec<String>,
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::valid()
    }
}

impl CheckReport {
    /// A report with no findings.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid_for_new_packages: true,
            valid_for_old_packages: true,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Build a report the way the package-name rules do: acceptable for new
    /// packages only with no findings at all, for old packages with no errors.
    #[must_use]
    pub fn from_findings(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            valid_for_new_packages: errors.is_empty() && warnings.is_empty(),
            valid_for_old_packages: errors.is_empty(),
            warnings,
            errors,
        }
    }

    /// A report rejecting the value under both rule sets with warnings only.
    #[must_use]
    pub fn rejected_with_warnings(warnings: Vec<String>) -> Self {
        Self {
            valid_for_new_packages: false,
            valid_for_old_packages: false,
            warnings,
            errors: Vec::new(),
        }
    }

    /// `true` when both flags hold and there are no messages.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.valid_for_new_packages
            && self.valid_for_old_packages
            && self.warnings.is_empty()
            && self.errors.is_empty()
    }
}
