//! validate-npm-package - package.json validation against npm registry rules
//!
//! Checks the fields of a `package.json` the way the npm registry judges them
//! and reports a single verdict: whether the manifest is acceptable for a new
//! package, whether it is acceptable for a package that already exists on the
//! registry (older rules were more lenient), and the ordered lists of errors
//! and warnings that led there.
//!
//! # Architecture Overview
//!
//! ```text
//! package.json ──► Manifest ──► Validator ──► Verdict ──► CLI output / exit status
//!                                  │
//!                     FIELD_RULES (26 fields, fixed order)
//!                                  │
//!             name / version / license checkers (pluggable)
//! ```
//!
//! # Core Modules
//!
//! - [`manifest`] - The `package.json` document and its discovery on disk
//! - [`validation`] - The field rule registry and verdict aggregation
//! - [`checkers`] - Package-name, semver and SPDX license checkers
//!
//! ## Supporting Modules
//! - [`cli`] - Command-line interface
//! - [`config`] - User defaults for the command line
//! - [`core`] - Operational errors and their user-facing rendering
//!
//! # Library Usage
//!
//! ```rust
//! use validate_npm_package::manifest::Manifest;
//! use validate_npm_package::validation::validate;
//!
//! let manifest = Manifest::from_json_str(
//!     r#"{
//!         "name": "left-pad",
//!         "version": "1.3.0",
//!         "license": "WTFPL",
//!         "description": "String left pad",
//!         "main": "index.js"
//!     }"#,
//! )?;
//!
//! let verdict = validate(&manifest);
//! assert!(verdict.valid_for_new_packages && verdict.valid_for_old_packages);
//! assert!(verdict.warnings.contains(&"missing repository".to_string()));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Validate the package enclosing the current directory
//! validate-npm-package
//!
//! # Only errors, for a specific package
//! validate-npm-package ./packages/core -q
//!
//! # CI: JSON output, warnings fail the build
//! validate-npm-package --format json --strict
//! ```

// Core functionality modules
pub mod checkers;
pub mod manifest;
pub mod validation;

// Supporting modules
pub mod cli;
pub mod config;
pub mod core;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
