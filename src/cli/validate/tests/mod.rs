//! Tests for the validate command module.
//!
//! - `command_tests`: manifest discovery, loading failures and exit status
//! - `format_tests`: text and JSON output, quiet and strict modes
