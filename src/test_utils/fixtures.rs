//! Sample `package.json` documents for tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::MANIFEST_FILE_NAME;

/// A named `package.json` document.
#[derive(Clone, Debug)]
pub struct ManifestFixture {
    pub content: String,
    pub name: String,
}

impl ManifestFixture {
    fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.trim().to_string(),
        }
    }

    /// Every required and recommended field, all well formed
    pub fn complete() -> Self {
        Self::new(
            "complete",
            r#"
{
  "name": "left-pad",
  "version": "1.3.0",
  "license": "MIT",
  "description": "String left pad",
  "main": "index.js",
  "keywords": ["pad", "string"],
  "bugs": "https://github.com/left-pad/left-pad/issues",
  "homepage": "https://github.com/left-pad/left-pad",
  "repository": { "type": "git", "url": "git+https://github.com/left-pad/left-pad.git" },
  "files": ["index.js"],
  "author": { "name": "azer", "email": "azer@example.com" }
}
"#,
        )
    }

    /// Only the five required fields; valid but with six warnings
    pub fn required_only() -> Self {
        Self::new(
            "required_only",
            r#"
{
  "name": "hi",
  "version": "2.0.0",
  "license": "MIT",
  "description": "hi",
  "main": "index.js"
}
"#,
        )
    }

    /// A non-semver version; invalid for both rule sets
    pub fn bad_version() -> Self {
        let mut fixture = Self::complete();
        fixture.name = "bad_version".to_string();
        fixture.content = fixture.content.replace("\"1.3.0\"", "\"%\"");
        fixture
    }

    /// Capitalized name; acceptable for old packages only
    pub fn legacy_name() -> Self {
        let mut fixture = Self::complete();
        fixture.name = "legacy_name".to_string();
        fixture.content = fixture.content.replace("\"left-pad\",", "\"LeftPad\",");
        fixture
    }

    /// `{}`
    pub fn empty() -> Self {
        Self::new("empty", "{}")
    }

    /// Not JSON at all
    pub fn invalid_syntax() -> Self {
        Self::new("invalid_syntax", r#"{ "name": "broken", "version": "#)
    }

    /// Valid JSON whose root is an array
    pub fn array_root() -> Self {
        Self::new("array_root", r#"["name", "version"]"#)
    }

    /// Write the manifest as `package.json` inside `dir`
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let manifest_path = dir.join(MANIFEST_FILE_NAME);
        fs::write(&manifest_path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", self.name))?;
        Ok(manifest_path)
    }
}
