//! Core types shared across the crate.
//!
//! ## `error` - Operational Error Handling
//!
//! - **Strongly-typed errors** ([`VnpError`]) for precise handling in code
//! - **User-friendly contexts** ([`ErrorContext`]) with suggestions for CLI users
//! - **Automatic conversion** from I/O, JSON and TOML errors
//!
//! Manifest validation findings are not errors in this sense; they live in
//! [`crate::validation::Verdict`].

pub mod error;
mod error_formatting;

pub use error::{ErrorContext, VnpError, create_error_context, user_friendly_error};
