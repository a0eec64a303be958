//! Text output, exit status and manifest discovery.

use predicates::prelude::*;
use validate_npm_package::test_utils::ManifestFixture;

use crate::common::TestProject;

#[test]
fn test_complete_manifest_passes_silently() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());

    project.command().assert().success().stdout("").stderr("");
}

#[test]
fn test_required_fields_only_warns() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("warning missing keywords"))
        .stdout(predicate::str::contains("warning missing author"))
        .stderr("");
}

#[test]
fn test_empty_manifest_fails() {
    let project = TestProject::with_fixture(&ManifestFixture::empty());

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error name must be a string"))
        .stderr(predicate::str::contains("error main must be a string"))
        .stdout(predicate::str::contains("warning missing files"));
}

#[test]
fn test_messages_keep_registry_order() {
    let project = TestProject::with_fixture(&ManifestFixture::empty());

    let output = project.command().output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(
        lines,
        vec![
            "error name must be a string",
            "error version must be a string",
            "error license must be a string",
            "error description must be a string",
            "error main must be a string",
        ]
    );
}

#[test]
fn test_invalid_version_fails() {
    let project = TestProject::with_fixture(&ManifestFixture::bad_version());

    project
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("error version must be a valid semver version"));
}

#[test]
fn test_legacy_name_fails_with_warning_only() {
    let project = TestProject::with_fixture(&ManifestFixture::legacy_name());

    project
        .command()
        .assert()
        .failure()
        .stdout(predicate::str::contains("warning name can no longer contain capital letters"))
        .stderr("");
}

#[test]
fn test_quiet_hides_warnings() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());

    project.command().arg("--quiet").assert().success().stdout("");
    project.command().arg("-q").assert().success().stdout("");
}

#[test]
fn test_quiet_keeps_errors() {
    let project = TestProject::with_fixture(&ManifestFixture::empty());

    project
        .command()
        .arg("-q")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("error version must be a string"));
}

#[test]
fn test_explicit_directory_argument() {
    let outer = TestProject::new();
    let package = ManifestFixture::bad_version();
    let package_dir = outer.path().join("packages").join("core");
    std::fs::create_dir_all(&package_dir).unwrap();
    package.write_to(&package_dir).unwrap();

    outer
        .command()
        .arg("packages/core")
        .assert()
        .failure()
        .stderr(predicate::str::contains("version must be a valid semver version"));
}

#[test]
fn test_explicit_file_argument() {
    let project = TestProject::new();
    let path = project.write_file(
        "manifests/other.json",
        &ManifestFixture::complete().content,
    );

    project.command().arg(&path).assert().success();
}

#[test]
fn test_relative_directory_argument_walks_up() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());
    let packages = project.path().join("packages");
    std::fs::create_dir_all(&packages).unwrap();

    project
        .command()
        .current_dir(&packages)
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("warning missing homepage"));
}

#[test]
fn test_search_walks_up_from_subdirectory() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());
    let nested = project.path().join("src").join("lib");
    std::fs::create_dir_all(&nested).unwrap();

    project
        .command()
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning missing homepage"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let project = TestProject::with_manifest(
        r#"{
  "name": "hi",
  "version": "2.0.0",
  "license": "MIT",
  "description": "hi",
  "main": "index.js",
  "private": true,
  "workspaces": 42
}"#,
    );

    project.command().arg("-q").assert().success();
}

#[test]
fn test_verbose_names_the_manifest() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());

    project
        .command()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating"))
        .stdout(predicate::str::contains("package.json"));
}

#[test]
fn test_version_flag() {
    let project = TestProject::new();

    project
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate-npm-package"));
}
