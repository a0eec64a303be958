//! Semantic-version syntax check backed by the `semver` crate.

use ::semver::Version;

use super::{VersionChecker, trim_whitespace};

/// Longest version string the registry accepts, surrounding whitespace included.
pub const MAX_VERSION_LENGTH: usize = 256;

/// Largest version component the registry accepts (`Number.MAX_SAFE_INTEGER`).
pub const MAX_COMPONENT: u64 = (1 << 53) - 1;

/// Accepts `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, optionally prefixed with a
/// single `v` and surrounded by whitespace, as npm does in strict mode.
/// Leading zeros, missing components, ranges and components above
/// [`MAX_COMPONENT`] are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverChecker;

impl SemverChecker {
    /// Parse `version` under the rules above.
    #[must_use]
    pub fn parse(version: &str) -> Option<Version> {
        if version.len() > MAX_VERSION_LENGTH {
            return None;
        }
        let trimmed = trim_whitespace(version);
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
        Version::parse(bare).ok().filter(|v| {
            v.major <= MAX_COMPONENT && v.minor <= MAX_COMPONENT && v.patch <= MAX_COMPONENT
        })
    }
}

impl VersionChecker for SemverChecker {
    fn is_valid_version(&self, version: &str) -> bool {
        Self::parse(version).is_some()
    }
}
