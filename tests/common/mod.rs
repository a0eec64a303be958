//! Shared helpers for driving the `validate-npm-package` binary.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use validate_npm_package::test_utils::ManifestFixture;

/// A temporary package directory, isolated from the user's configuration.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("create temp dir"),
        }
    }

    /// A project whose `package.json` is the given fixture.
    pub fn with_fixture(fixture: &ManifestFixture) -> Self {
        let project = Self::new();
        fixture.write_to(project.path()).expect("write fixture");
        project
    }

    /// A project whose `package.json` is `content`.
    pub fn with_manifest(content: &str) -> Self {
        let project = Self::new();
        project.write_file("package.json", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path().join("package.json")
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    /// The binary, running inside the project, with a config path that does
    /// not exist and colors disabled.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("validate-npm-package").expect("binary exists");
        cmd.current_dir(self.path())
            .env("VNP_CONFIG_PATH", self.path().join(".no-config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}
