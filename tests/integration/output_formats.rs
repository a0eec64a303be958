//! JSON output, quiet and strict modes.

use predicates::prelude::*;
use serde_json::Value;
use validate_npm_package::test_utils::ManifestFixture;

use crate::common::TestProject;

fn json_output(project: &TestProject, args: &[&str]) -> (bool, Value) {
    let output = project.command().args(["--format", "json"]).args(args).output().unwrap();
    let value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    (output.status.success(), value)
}

#[test]
fn test_json_for_valid_manifest() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());

    let (success, json) = json_output(&project, &[]);
    assert!(success);
    assert_eq!(json["valid"], true);
    assert_eq!(json["validForNewPackages"], true);
    assert_eq!(json["validForOldPackages"], true);
    assert!(json["manifest"].as_str().unwrap().ends_with("package.json"));
    assert_eq!(json["errors"], Value::Array(vec![]));
    assert_eq!(json["warnings"], Value::Array(vec![]));
}

#[test]
fn test_json_for_invalid_manifest() {
    let project = TestProject::with_fixture(&ManifestFixture::empty());

    let (success, json) = json_output(&project, &[]);
    assert!(!success);
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"].as_array().unwrap().len(), 5);
    assert_eq!(json["errors"][0], "name must be a string");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 6);
}

#[test]
fn test_json_for_legacy_name() {
    let project = TestProject::with_fixture(&ManifestFixture::legacy_name());

    let (success, json) = json_output(&project, &[]);
    assert!(!success);
    assert_eq!(json["validForNewPackages"], false);
    assert_eq!(json["validForOldPackages"], true);
}

#[test]
fn test_json_stderr_is_clean() {
    let project = TestProject::with_fixture(&ManifestFixture::empty());

    project.command().args(["--format", "json"]).assert().failure().stderr("");
}

#[test]
fn test_strict_fails_on_warnings() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());

    project
        .command()
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));

    let (success, json) = json_output(&project, &["--strict"]);
    assert!(!success);
    assert_eq!(json["valid"], false);
    assert_eq!(json["validForNewPackages"], true);
    assert_eq!(json["validForOldPackages"], true);
}

#[test]
fn test_strict_passes_clean_manifest() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());

    project.command().arg("--strict").assert().success();
}

#[test]
fn test_unknown_format_is_rejected() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());

    project
        .command()
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("yaml"));
}
