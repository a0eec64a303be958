//! Validation results structure for JSON output.

use serde::Serialize;
use std::path::Path;

use crate::validation::Verdict;

/// Everything one run of the command found, serialized for `--format json`.
///
/// # JSON Output Example
///
/// ```json
/// {
///   "valid": false,
///   "validForNewPackages": false,
///   "validForOldPackages": true,
///   "manifest": "/work/left-pad/package.json",
///   "errors": [],
///   "warnings": ["name can no longer contain capital letters"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResults {
    /// Overall status: both flags hold (and, in strict mode, no warnings)
    pub valid: bool,
    /// Acceptable for publishing a new package
    pub valid_for_new_packages: bool,
    /// Acceptable for an already-published package
    pub valid_for_old_packages: bool,
    /// The manifest that was validated, when one was found
    pub manifest: Option<String>,
    /// Error messages, in registry order
    pub errors: Vec<String>,
    /// Warning messages, in registry order
    pub warnings: Vec<String>,
}

impl Default for ValidationResults {
    fn default() -> Self {
        Self {
            valid: true,
            valid_for_new_packages: true,
            valid_for_old_packages: true,
            manifest: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl ValidationResults {
    /// Summarize a verdict; `strict` makes any warning fail the run.
    #[must_use]
    pub fn from_verdict(manifest: &Path, verdict: Verdict, strict: bool) -> Self {
        let valid = verdict.ensure_valid(strict).is_ok();
        Self {
            valid,
            valid_for_new_packages: verdict.valid_for_new_packages,
            valid_for_old_packages: verdict.valid_for_old_packages,
            manifest: Some(manifest.display().to_string()),
            errors: verdict.errors,
            warnings: verdict.warnings,
        }
    }

    /// The result reported when validation could not run at all.
    #[must_use]
    pub fn failure(manifest: Option<&Path>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            valid_for_new_packages: false,
            valid_for_old_packages: false,
            manifest: manifest.map(|path| path.display().to_string()),
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }
}
