//! Configuration for the command line.
//!
//! Only user-wide defaults exist: see [`GlobalConfig`] for the file format and
//! how its location is resolved. The manifest under validation is never
//! configured; every rule is fixed.

mod global;

pub use global::{CONFIG_PATH_ENV, GlobalConfig};
