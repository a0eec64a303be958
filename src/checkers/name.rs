//! npm registry naming rules for the `name` field.
//!
//! Errors make a name unusable for any package. Warnings describe rules that
//! were introduced after the registry already held packages breaking them:
//! such names remain acceptable for old packages but not for new ones.

use regex::Regex;
use std::sync::OnceLock;

use super::{PackageNameChecker, trim_whitespace};
use crate::validation::CheckReport;

/// Longest name accepted for new packages.
pub const MAX_NAME_LENGTH: usize = 214;

/// Names that can never be published.
const BLACKLIST: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core module names; publishing under them shadows the builtin.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "freelist",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "smalloc",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Characters `encodeURIComponent` leaves untouched besides ASCII alphanumerics.
const URI_UNRESERVED: &[char] = &['-', '_', '.', '!', '~', '*', '\'', '(', ')'];

/// Characters no longer allowed in the final path segment of a name.
const LEGACY_SPECIAL_CHARS: &[char] = &['~', '\'', '!', '(', ')', '*'];

fn scoped_package_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:@([^/]+?)/)?([^/]+?)$").ok()).as_ref()
}

/// Returns `true` if percent-encoding `segment` as a URI component would leave
/// it unchanged.
fn is_url_safe(segment: &str) -> bool {
    segment.chars().all(|c| c.is_ascii_alphanumeric() || URI_UNRESERVED.contains(&c))
}

/// The npm registry's package-name rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmNameChecker;

impl NpmNameChecker {
    fn has_url_safe_characters(name: &str) -> bool {
        if is_url_safe(name) {
            return true;
        }
        // `@scope/pkg` is fine as long as both halves are URL-safe on their own
        let Some(pattern) = scoped_package_pattern() else {
            return false;
        };
        pattern.captures(name).is_some_and(|caps| {
            match (caps.get(1), caps.get(2)) {
                (Some(scope), Some(package)) => {
                    is_url_safe(scope.as_str()) && is_url_safe(package.as_str())
                }
                _ => false,
            }
        })
    }
}

impl PackageNameChecker for NpmNameChecker {
    fn check_name(&self, name: &str) -> CheckReport {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push("name length must be greater than zero".to_string());
        }
        if name.starts_with('.') {
            errors.push("name cannot start with a period".to_string());
        }
        if name.starts_with('_') {
            errors.push("name cannot start with an underscore".to_string());
        }
        if trim_whitespace(name) != name {
            errors.push("name cannot contain leading or trailing spaces".to_string());
        }

        let lowercase = name.to_lowercase();
        for blacklisted in BLACKLIST {
            if lowercase == *blacklisted {
                errors.push(format!("{blacklisted} is a blacklisted name"));
            }
        }
        for core_module in CORE_MODULES {
            if lowercase == *core_module {
                warnings.push(format!("{core_module} is a core module name"));
            }
        }

        // Lengths are counted the way the registry's JavaScript does (UTF-16 units)
        if name.encode_utf16().count() > MAX_NAME_LENGTH {
            warnings.push(format!(
                "name can no longer contain more than {MAX_NAME_LENGTH} characters"
            ));
        }
        if lowercase != name {
            warnings.push("name can no longer contain capital letters".to_string());
        }

        let last_segment = name.rsplit('/').next().unwrap_or(name);
        if last_segment.contains(LEGACY_SPECIAL_CHARS) {
            warnings.push("name can no longer contain special characters (\"~'!()*\")".to_string());
        }

        if !Self::has_url_safe_characters(name) {
            errors.push("name can only contain URL-friendly characters".to_string());
        }

        CheckReport::from_findings(warnings, errors)
    }
}
