//! Validate a `package.json` against the npm registry's publishing rules.
//!
//! # Examples
//!
//! Validate the package enclosing the current directory:
//! ```bash
//! validate-npm-package
//! ```
//!
//! Validate another package, errors only:
//! ```bash
//! validate-npm-package ../left-pad --quiet
//! ```
//!
//! JSON output for automation, failing on warnings:
//! ```bash
//! validate-npm-package --format json --strict
//! ```
//!
//! # Output Formats
//!
//! ## Text Format (Default)
//! ```text
//! error version must be a valid semver version
//! warning missing keywords
//! ```
//! Errors go to stderr and warnings to stdout, so `2>/dev/null` leaves only
//! warnings and `--quiet` leaves only errors.
//!
//! ## JSON Format
//! ```json
//! {
//!   "valid": false,
//!   "validForNewPackages": false,
//!   "validForOldPackages": false,
//!   "manifest": "/work/left-pad/package.json",
//!   "errors": ["version must be a valid semver version"],
//!   "warnings": ["missing keywords"]
//! }
//! ```
//!
//! # Exit Status
//!
//! Non-zero when the manifest is unacceptable under either rule set, when
//! `--strict` is set and any warning was reported, or when the manifest could
//! not be found or read.

mod command;
mod executor;
mod results;

#[cfg(test)]
mod tests;

pub use command::{OutputFormat, ValidateCommand};
pub use results::ValidationResults;
