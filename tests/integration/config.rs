//! User config file handling.

use predicates::prelude::*;
use validate_npm_package::test_utils::ManifestFixture;

use crate::common::TestProject;

#[test]
fn test_config_selects_json_format() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());
    let config = project.write_file("vnp.toml", "format = \"json\"\n");

    project
        .command()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"validForNewPackages\": true"));
}

#[test]
fn test_flag_overrides_config_format() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());
    let config = project.write_file("vnp.toml", "format = \"json\"\n");

    project
        .command()
        .args(["--format", "text"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning missing keywords"));
}

#[test]
fn test_config_from_environment() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());
    let config = project.write_file("env.toml", "strict = true\n");

    project.command().env("VNP_CONFIG_PATH", &config).assert().failure();
}

#[test]
fn test_config_quiet() {
    let project = TestProject::with_fixture(&ManifestFixture::required_only());
    let config = project.write_file("vnp.toml", "quiet = true\n");

    project.command().arg("--config").arg(&config).assert().success().stdout("");
}

#[test]
fn test_invalid_config_is_reported() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());
    let config = project.write_file("vnp.toml", "strict = \"yes\"\n");

    project
        .command()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_explicit_config_is_reported() {
    let project = TestProject::with_fixture(&ManifestFixture::complete());

    project
        .command()
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}
