//! Manifest file discovery in directory hierarchies.

use anyhow::{Context, Result};
use std::path::PathBuf;

use super::MANIFEST_FILE_NAME;
use crate::core::VnpError;

/// Find manifest by searching up directory tree from current directory.
///
/// Searches for `package.json` starting from the current working directory
/// and walking up until found or filesystem root is reached, the way npm
/// itself locates the enclosing package.
///
/// # Errors
///
/// - **No manifest found**: searched to the filesystem root without a match
/// - **No working directory**: the current directory cannot be determined
pub fn find_manifest() -> Result<PathBuf> {
    let current = std::env::current_dir().context(
        "Cannot determine current working directory. This may indicate a permission issue or corrupted filesystem",
    )?;
    find_manifest_from(current)
}

/// Find manifest using explicit path or directory search.
///
/// - An explicit path naming a file is used as-is if it exists.
/// - An explicit path naming a directory starts the upward search there.
/// - No explicit path searches upward from the current directory.
///
/// # Errors
///
/// - Explicit path provided but doesn't exist
/// - No manifest found via search
///
/// # Examples
///
/// ```rust,no_run
/// use validate_npm_package::manifest::find_manifest_with_optional;
/// use std::path::PathBuf;
///
/// # fn main() -> anyhow::Result<()> {
/// let explicit = find_manifest_with_optional(Some(PathBuf::from("./package.json")))?;
/// let searched = find_manifest_with_optional(None)?;
/// # Ok(())
/// # }
/// ```
pub fn find_manifest_with_optional(explicit_path: Option<PathBuf>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) if path.is_dir() => find_manifest_from(path),
        Some(path) => {
            if path.exists() {
                Ok(path)
            } else {
                Err(VnpError::ManifestNotFound)
                    .with_context(|| format!("Manifest file {} does not exist", path.display()))
            }
        }
        None => find_manifest(),
    }
}

/// Find manifest by searching up from a specific starting directory.
///
/// A relative `start` is resolved against the current directory first, so the
/// walk continues above it.
///
/// 1. Check for `package.json` in `current`
/// 2. If found, return full path
/// 3. Otherwise move to the parent directory and repeat
/// 4. Fail at the filesystem root
///
/// ```text
/// /home/user/project/
/// ├── package.json       ← Found here
/// └── src/
///     └── lib/           ← Search started here, walks up
/// ```
pub fn find_manifest_from(start: PathBuf) -> Result<PathBuf> {
    let mut current = std::path::absolute(&start)
        .with_context(|| format!("Cannot resolve directory {}", start.display()))?;
    loop {
        let manifest_path = current.join(MANIFEST_FILE_NAME);
        tracing::trace!("Looking for manifest at {}", manifest_path.display());
        if manifest_path.is_file() {
            tracing::debug!("Found manifest at {}", manifest_path.display());
            return Ok(manifest_path);
        }

        if !current.pop() {
            return Err(VnpError::ManifestNotFound.into());
        }
    }
}
