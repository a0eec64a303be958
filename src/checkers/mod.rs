//! Syntax checkers the field validators delegate to.
//!
//! The validation core treats package-name rules, semantic-version syntax and
//! SPDX license expressions as opaque capabilities. Each is a narrow trait, so
//! a host can swap in its own rules (for example a private registry with a
//! different naming policy) through [`Validator::new`](crate::validation::Validator::new).
//!
//! Default implementations:
//!
//! | Capability | Trait | Default |
//! |---|---|---|
//! | Package names | [`PackageNameChecker`] | [`NpmNameChecker`] |
//! | Versions | [`VersionChecker`] | [`SemverChecker`] |
//! | Licenses | [`LicenseChecker`] | [`SpdxLicenseChecker`] |

pub mod license;
pub mod name;
pub mod semver;

pub use license::SpdxLicenseChecker;
pub use name::NpmNameChecker;
pub use semver::SemverChecker;

use crate::validation::CheckReport;

/// Registry naming rules for the `name` field.
pub trait PackageNameChecker: Send + Sync {
    /// Classify `name`; errors disqualify the name everywhere, warnings mark
    /// names that only legacy packages may keep using.
    fn check_name(&self, name: &str) -> CheckReport;
}

/// Semantic-version syntax for the `version` field.
pub trait VersionChecker: Send + Sync {
    /// `true` if `version` parses as a semantic version.
    fn is_valid_version(&self, version: &str) -> bool;
}

/// License expression rules for the `license` field.
pub trait LicenseChecker: Send + Sync {
    /// Classify a license expression.
    fn check_license(&self, license: &str) -> CheckReport;
}

/// Trim the way the registry's JavaScript `String.prototype.trim` does:
/// Unicode `White_Space` except NEL, plus the byte order mark.
pub(crate) fn trim_whitespace(value: &str) -> &str {
    value.trim_matches(|c: char| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}
