//! Integration tests for the `capreg` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch directory with a config file whose storage points inside it.
struct Sandbox {
    dir: TempDir,
    config: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        Self::with_extra("")
    }

    fn with_extra(extra: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("capreg.toml");
        let storage = format!(
            "[storage]\nrecords_dir = {:?}\nlog_file = {:?}\n",
            dir.path().join("records").to_string_lossy(),
            dir.path().join("capreg.log").to_string_lossy(),
        );
        fs::write(&config, format!("{storage}\n{extra}")).unwrap();
        Self { dir, config }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("capreg").unwrap();
        cmd.current_dir(self.dir.path())
            .arg("--config")
            .arg(&self.config)
            .arg("--no-color");
        cmd
    }
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("capreg")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("capreg wires providers"))
        .stdout(predicate::str::contains("total-area"));
}

#[test]
fn test_short_help_flag() {
    Command::cargo_bin("capreg")
        .unwrap()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Capability registry"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("capreg")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── area ──────────────────────────────────────────────────────────────────────

#[test]
fn test_rectangle_area() {
    Sandbox::new()
        .cmd()
        .args(["area", "rectangle", "-d", "width=5", "-d", "height=10"])
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn test_circle_area() {
    Sandbox::new()
        .cmd()
        .args(["area", "circle", "-d", "radius=7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("153.93"));
}

#[test]
fn test_area_json_output() {
    Sandbox::new()
        .cmd()
        .args(["--output-format", "json", "area", "square", "-d", "side=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shape\": \"square\""))
        .stdout(predicate::str::contains("\"area\": 9.0"));
}

#[test]
fn test_total_area() {
    Sandbox::new()
        .cmd()
        .args([
            "total-area",
            "--shape",
            "rectangle:width=5,height=10",
            "--shape",
            "square:side=2",
        ])
        .assert()
        .success()
        .stdout("54\n");
}

#[test]
fn test_unknown_shape_is_not_found() {
    Sandbox::new()
        .cmd()
        .args(["area", "hexagon", "-d", "side=1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("hexagon"))
        .stderr(predicate::str::contains("capreg list area"));
}

#[test]
fn test_missing_dimension_is_provider_failure() {
    Sandbox::new()
        .cmd()
        .args(["--verbose", "area", "circle"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("radius"));
}

#[test]
fn test_malformed_dimension_is_user_error() {
    Sandbox::new()
        .cmd()
        .args(["area", "circle", "-d", "radius"])
        .assert()
        .code(2);
}

#[test]
fn test_triangle_missing_from_wiring() {
    let sandbox = Sandbox::with_extra("[wiring]\narea = [\"rectangle\", \"circle\"]\n");

    sandbox
        .cmd()
        .args(["area", "triangle", "-d", "base=2", "-d", "height=2"])
        .assert()
        .code(3);

    sandbox
        .cmd()
        .args(["area", "rectangle", "-d", "width=5", "-d", "height=10"])
        .assert()
        .success()
        .stdout("50\n");
}

// ── wiring / config ───────────────────────────────────────────────────────────

#[test]
fn test_unknown_wiring_entry_is_configuration_error() {
    Sandbox::with_extra("[wiring]\narea = [\"hexagon\"]\n")
        .cmd()
        .arg("list")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("hexagon"));
}

#[test]
fn test_missing_explicit_config_is_configuration_error() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin("capreg")
        .unwrap()
        .current_dir(tmp.path())
        .args(["--config", "absent.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_permissive_mode_from_environment() {
    Sandbox::new()
        .cmd()
        .env("CAPREG_REGISTRY__MODE", "permissive")
        .args(["config", "get", "registry.mode"])
        .assert()
        .success()
        .stdout("permissive\n");
}

#[test]
fn test_config_get_unknown_key() {
    Sandbox::new()
        .cmd()
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4);
}

#[test]
fn test_config_path_reports_explicit_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capreg.toml"));
}

#[test]
fn test_init_writes_config() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("fresh.toml");

    Command::cargo_bin("capreg")
        .unwrap()
        .current_dir(tmp.path())
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[registry]"));
    assert!(written.contains("[wiring]"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn test_list_plain() {
    Sandbox::new()
        .cmd()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("area/circle"))
        .stdout(predicate::str::contains("logging/file"))
        .stdout(predicate::str::contains("scanning/multifunction"));
}

#[test]
fn test_list_single_capability_json() {
    Sandbox::new()
        .cmd()
        .args(["list", "persistence", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"persistence\""))
        .stdout(predicate::str::contains("area").not());
}

#[test]
fn test_list_unknown_capability() {
    Sandbox::new()
        .cmd()
        .args(["list", "teleport"])
        .assert()
        .code(3);
}

// ── save / log / print ────────────────────────────────────────────────────────

#[test]
fn test_save_writes_record_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["save", "user-1", r#"{"name":"Ada"}"#])
        .assert()
        .success()
        .stdout("user-1\n");

    let record = sandbox.dir.path().join("records").join("user-1.json");
    assert!(fs::read_to_string(record).unwrap().contains("Ada"));
}

#[test]
fn test_save_rejects_bad_json() {
    Sandbox::new()
        .cmd()
        .args(["save", "user-1", "{oops"])
        .assert()
        .code(2);
}

#[test]
fn test_save_rejects_path_key() {
    Sandbox::new()
        .cmd()
        .args(["save", "../escape", "{}"])
        .assert()
        .code(5);
}

#[test]
fn test_log_to_console() {
    Sandbox::new()
        .cmd()
        .args(["log", "deploy finished"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO  deploy finished"));
}

#[test]
fn test_log_to_file() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["log", "disk full", "--level", "error", "--sink", "file"])
        .assert()
        .success();

    let log = fs::read_to_string(sandbox.dir.path().join("capreg.log")).unwrap();
    assert!(log.contains("ERROR disk full"));
}

#[test]
fn test_print_returns_job_id() {
    Sandbox::new()
        .cmd()
        .args(["print", "Memo", "Lunch at noon"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9a-f-]{36}\n$").unwrap());
}

#[test]
fn test_scan_needs_a_scanner() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["scan", "receipt"])
        .assert()
        .code(3);

    sandbox
        .cmd()
        .args(["scan", "receipt", "--pages", "2", "--device", "multifunction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[receipt page 2/2]"));
}

#[test]
fn test_completions_bash() {
    Command::cargo_bin("capreg")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capreg"));
}
