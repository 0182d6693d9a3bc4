// バイナリのエントリーポイントのテスト
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pair_sampler"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pair_sampler"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("evaluate"));
}

#[test]
fn test_cli_version() {
    let output = binary().arg("--version").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pair_sampler"));
}

#[test]
fn test_cli_run_quiet_prints_average_and_elapsed() {
    let output = binary()
        .args(["run", "--iterations", "1000", "--quiet"])
        .output()
        .expect("Failed to execute run command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Final average:"));
    assert!(stdout.contains("Elapsed time:"));
}

#[test]
fn test_cli_run_zero_producers_reports_insufficient() {
    let output = binary()
        .args(["run", "--producers", "0", "--iterations", "10", "--quiet"])
        .output()
        .expect("Failed to execute run command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Not enough elements"));
    assert!(!stdout.contains("Final average"));
}

#[test]
fn test_cli_run_json_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pipeline.json");
    fs::write(
        &config_path,
        r#"{"producer_count": 2, "consumer_count": 2, "iterations": 200, "wait_strategy": "spin"}"#,
    )
    .unwrap();

    let output = binary()
        .arg("run")
        .arg("--config")
        .arg(&config_path)
        .arg("--json")
        .output()
        .expect("Failed to execute run command");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["settings"]["producer_count"], 2);
    assert_eq!(json["settings"]["wait_strategy"], "spin");
    assert_eq!(json["summary"]["generated"], 400);
    assert_eq!(json["outcome"]["kind"], "average");
}

#[test]
fn test_cli_run_invalid_config_fails() {
    let output = binary()
        .args(["run", "--low", "1", "--high", "0", "--quiet"])
        .output()
        .expect("Failed to execute run command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error"));
}

#[test]
fn test_cli_evaluate() {
    let output = binary()
        .args(["evaluate", "1", "0.5"])
        .output()
        .expect("Failed to execute evaluate command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("contributes nothing"));
}
