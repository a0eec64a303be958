//! Manifest validation: the field registry and the verdict aggregator.
//!
//! [`Validator::validate`] walks [`FIELD_RULES`] in order, runs each rule
//! against the matching manifest field (or its absence) and folds every
//! [`FieldOutcome`] into a single [`Verdict`]. Nothing short-circuits: all
//! rules run for every manifest, so one call reports every problem at once.
//!
//! Validation never fails. Shape problems, registry rule violations and
//! quality warnings are all data in the returned verdict.
//!
//! # Examples
//!
//! ```rust
//! use validate_npm_package::manifest::Manifest;
//! use validate_npm_package::validation::validate;
//!
//! let manifest = Manifest::from_json_str(r#"{ "name": "left-pad", "version": "1.0.0" }"#)?;
//! let verdict = validate(&manifest);
//!
//! assert!(!verdict.is_valid());
//! assert!(verdict.errors.contains(&"license must be a string".to_string()));
//! assert!(verdict.warnings.contains(&"missing keywords".to_string()));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod outcome;
pub mod predicates;
pub mod registry;
mod verdict;

pub use outcome::{CheckReport, FieldOutcome};
pub use registry::{FIELD_RULES, FieldRule};
pub use verdict::Verdict;

use std::sync::OnceLock;

use crate::checkers::{
    LicenseChecker, NpmNameChecker, PackageNameChecker, SemverChecker, SpdxLicenseChecker,
    VersionChecker,
};
use crate::manifest::Manifest;

/// The external capabilities the field rules delegate to.
pub struct CheckerSet {
    /// Rules for `name`
    pub name: Box<dyn PackageNameChecker>,
    /// Syntax for `version`
    pub version: Box<dyn VersionChecker>,
    /// Expressions for `license`
    pub license: Box<dyn LicenseChecker>,
}

impl Default for CheckerSet {
    fn default() -> Self {
        Self {
            name: Box::new(NpmNameChecker),
            version: Box::new(SemverChecker),
            license: Box::new(SpdxLicenseChecker),
        }
    }
}

impl std::fmt::Debug for CheckerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerSet").finish_non_exhaustive()
    }
}

/// Validates manifests against the field registry.
///
/// Holds only immutable checkers, so a single instance can be shared between
/// threads.
#[derive(Debug, Default)]
pub struct Validator {
    checkers: CheckerSet,
}

impl Validator {
    /// Build a validator around custom checkers.
    pub fn new(
        name: impl PackageNameChecker + 'static,
        version: impl VersionChecker + 'static,
        license: impl LicenseChecker + 'static,
    ) -> Self {
        Self::with_checkers(CheckerSet {
            name: Box::new(name),
            version: Box::new(version),
            license: Box::new(license),
        })
    }

    /// Build a validator from an already assembled [`CheckerSet`].
    #[must_use]
    pub const fn with_checkers(checkers: CheckerSet) -> Self {
        Self { checkers }
    }

    /// Run every registered rule and fold the outcomes into a verdict.
    #[must_use]
    pub fn validate(&self, manifest: &Manifest) -> Verdict {
        let verdict = FIELD_RULES.iter().fold(Verdict::new(), |mut verdict, rule| {
            let outcome = rule.apply(manifest.get(rule.field), &self.checkers);
            tracing::trace!("{}: {:?}", rule.field, outcome);
            verdict.merge(outcome);
            verdict
        });

        tracing::debug!(
            "Validation finished: new={}, old={}, {} error(s), {} warning(s)",
            verdict.valid_for_new_packages,
            verdict.valid_for_old_packages,
            verdict.errors.len(),
            verdict.warnings.len()
        );
        verdict
    }
}

fn default_validator() -> &'static Validator {
    static VALIDATOR: OnceLock<Validator> = OnceLock::new();
    VALIDATOR.get_or_init(Validator::default)
}

/// Validate `manifest` with the default npm checkers.
#[must_use]
pub fn validate(manifest: &Manifest) -> Verdict {
    default_validator().validate(manifest)
}
