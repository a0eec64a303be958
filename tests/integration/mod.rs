//! Integration test suite for validate-npm-package
//!
//! Drives the compiled binary end to end: manifest discovery, output on
//! stdout and stderr, exit status and the user config file.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **validate**: Text output, exit status and manifest discovery
//! - **output_formats**: JSON output, quiet and strict modes
//! - **config**: User config file handling
//! - **error_scenarios**: Missing, unreadable and malformed manifests

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod config;
mod error_scenarios;
mod output_formats;
mod validate;
