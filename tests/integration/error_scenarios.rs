//! Missing, unreadable and malformed manifests.

use predicates::prelude::*;
use serde_json::Value;
use validate_npm_package::test_utils::ManifestFixture;

use crate::common::TestProject;

#[test]
fn test_missing_explicit_manifest() {
    let project = TestProject::new();

    project
        .command()
        .arg("nowhere/package.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_missing_manifest_in_json_mode() {
    let project = TestProject::new();

    let output = project
        .command()
        .args(["--format", "json", "nowhere/package.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["manifest"], Value::Null);
    assert!(!json["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_malformed_json() {
    let project = TestProject::with_fixture(&ManifestFixture::invalid_syntax());

    project
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"))
        .stderr(predicate::str::contains("valid JSON"));
}

#[test]
fn test_non_object_root() {
    let project = TestProject::with_fixture(&ManifestFixture::array_root());

    project
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("must contain a JSON object, found array"));
}

#[test]
fn test_malformed_json_in_json_mode() {
    let project = TestProject::with_fixture(&ManifestFixture::invalid_syntax());

    let output = project.command().args(["--format", "json"]).output().unwrap();
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert!(json["manifest"].as_str().unwrap().ends_with("package.json"));
}
