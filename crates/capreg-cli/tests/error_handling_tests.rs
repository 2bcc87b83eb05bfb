//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn capreg(dir: &TempDir) -> Command {
    let config = dir.path().join("capreg.toml");
    std::fs::write(
        &config,
        format!(
            "[storage]\nrecords_dir = {:?}\nlog_file = {:?}\n",
            dir.path().join("records").to_string_lossy(),
            dir.path().join("capreg.log").to_string_lossy(),
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("capreg").unwrap();
    cmd.current_dir(dir.path())
        .arg("--no-color")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_unknown_provider_suggests_list() {
    let tmp = TempDir::new().unwrap();
    capreg(&tmp)
        .args(["area", "hexagon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("capreg list area"));
}

#[test]
fn test_provider_failure_hides_cause_without_verbose() {
    let tmp = TempDir::new().unwrap();
    capreg(&tmp)
        .args(["area", "rectangle", "-d", "width=5"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Caused by").not())
        .stderr(predicate::str::contains("--verbose"));
}

#[test]
fn test_provider_failure_shows_cause_with_verbose() {
    let tmp = TempDir::new().unwrap();
    capreg(&tmp)
        .args(["-v", "area", "rectangle", "-d", "width=5"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Caused by: invalid input"))
        .stderr(predicate::str::contains("height"));
}

#[test]
fn test_invalid_shape_name() {
    let tmp = TempDir::new().unwrap();
    capreg(&tmp)
        .args(["area", "hex agon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    Command::cargo_bin("capreg")
        .unwrap()
        .arg("teleport")
        .assert()
        .code(2);
}
