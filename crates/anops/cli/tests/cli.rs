//! Binary-level tests for the `anops` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn anops() -> Command {
    let mut cmd = Command::cargo_bin("anops").unwrap();
    cmd.env_remove("ANOPS_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn generators_lists_every_name() {
    anops()
        .arg("generators")
        .assert()
        .success()
        .stdout(predicate::str::contains("emergency-triage"))
        .stdout(predicate::str::contains("wearable-vitals"))
        .stdout(predicate::str::contains("ecg-alarm"))
        .stdout(predicate::str::contains("ambulance-movement"))
        .stdout(predicate::str::contains("ward-congestion"))
        .stdout(predicate::str::contains("imaging-transfer"));
}

#[test]
fn run_prints_full_record_as_json() {
    let run = stdout_json(anops().args([
        "--output",
        "json",
        "run",
        "--generator",
        "emergency-triage",
        "--seed",
        "1",
    ]));

    assert_eq!(run["generator"], "emergency-triage");
    assert_eq!(run["intent"]["intent"], "emergency_response");
    assert_eq!(run["decision"]["slice"], "URLLC");
    assert_eq!(run["decision"]["qos_class"], 1);
    assert_eq!(run["api_calls"].as_array().unwrap().len(), 3);
    assert_eq!(run["effects"].as_array().unwrap().len(), 3);
}

#[test]
fn run_table_shows_decision() {
    anops()
        .args(["run", "-g", "ward-congestion", "-s", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mMTC"))
        .stdout(predicate::str::contains("resource_optimization"));
}

#[test]
fn run_rejects_unknown_generator() {
    anops()
        .args(["run", "--generator", "lab-results"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown generator: lab-results"));
}

#[test]
fn run_rejects_zero_count() {
    anops()
        .args(["run", "--generator", "ecg-alarm", "--count", "0"])
        .assert()
        .failure();
}

#[test]
fn history_is_bounded_to_ten() {
    let report = stdout_json(anops().args([
        "--output",
        "json",
        "history",
        "--generator",
        "wearable-vitals",
        "--count",
        "12",
        "--seed",
        "5",
    ]));

    assert_eq!(report["runs_completed"], 12);
    assert_eq!(report["kpi"].as_array().unwrap().len(), 10);
    assert_eq!(report["koi"].as_array().unwrap().len(), 10);
}

#[test]
fn config_prints_defaults_as_yaml() {
    anops()
        .args(["--output", "yaml", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hot_capacity: 5"))
        .stdout(predicate::str::contains("warm_capacity: 20"))
        .stdout(predicate::str::contains("strict_categories: false"));
}

#[test]
fn strict_flag_reaches_config() {
    let config = stdout_json(anops().args(["--output", "json", "--strict", "config"]));
    assert_eq!(config["strict_categories"], true);
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    anops()
        .args(["--output", "yaml", "--config", "/nonexistent/anops.toml", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hot_capacity: 5"));
}

#[test]
fn config_basename_resolves_extension() {
    let dir = std::env::temp_dir().join(format!("anops-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("settings.yaml"), "memory:\n  hot_capacity: 3\n").unwrap();
    let basename = dir.join("settings");

    anops()
        .args(["--output", "yaml", "--config"])
        .arg(&basename)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("hot_capacity: 3"));

    std::fs::remove_dir_all(&dir).ok();
}

const LAB_RESULT: &str = r#"{
    "source": "lab_system",
    "type": "lab_result",
    "timestamp": "2024-05-01T10:00:00.123456",
    "payload": {"panel": "CBC"}
}"#;

#[test]
fn run_input_falls_back_to_embb_by_default() {
    let run = stdout_json(
        anops()
            .args(["--output", "json", "run", "--input", "-"])
            .write_stdin(LAB_RESULT),
    );

    assert_eq!(run["generator"], Value::Null);
    assert_eq!(run["intent"]["intent"], "unknown");
    assert_eq!(run["decision"]["slice"], "eMBB");
    assert_eq!(run["standard_event"]["timestamp"], "2024-05-01T10:00:00.123456");
}

#[test]
fn strict_run_rejects_unrecognized_event_type() {
    anops()
        .args(["--strict", "run", "--input", "-"])
        .write_stdin(LAB_RESULT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized event type"));
}

#[test]
fn run_requires_generator_or_input() {
    anops().arg("run").assert().failure();
}

#[test]
fn run_table_shows_memory_tiers() {
    anops()
        .args(["run", "-g", "ecg-alarm", "-n", "7", "-s", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hot tier"))
        .stdout(predicate::str::contains("5/5"))
        .stdout(predicate::str::contains("2/20"));
}

#[test]
fn memory_lists_tiers() {
    let report = stdout_json(anops().args([
        "--output",
        "json",
        "memory",
        "--generator",
        "ambulance-movement",
        "--count",
        "12",
        "--seed",
        "4",
    ]));

    assert_eq!(report["stats"]["hot"], 5);
    assert_eq!(report["stats"]["warm"], 7);
    assert_eq!(report["hot"].as_array().unwrap().len(), 5);
    assert_eq!(report["warm"].as_array().unwrap().len(), 7);
    assert_eq!(report["cold"], 0);
    assert_eq!(report["hot"][0]["type"], "mobility_status");
}

#[test]
fn memory_table_reports_cold_count() {
    anops()
        .args(["memory", "-g", "imaging-transfer", "-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("imaging_request"))
        .stdout(predicate::str::contains("cold tier holds 0 event(s)"));
}
