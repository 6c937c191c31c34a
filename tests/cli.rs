use std::process::Command;

fn speedtest() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_speedtest"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_prints_every_suite() {
    let output = speedtest().arg("--list").output().expect("binary runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "debug_log",
        "property_vs_field",
        "string_concat",
        "component_caching",
        "generic_vs_explicit",
    ] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}

#[test]
fn selected_suite_prints_report_lines() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("report.json");
    let output = speedtest()
        .args(["--suite", "property_vs_field", "--iterations", "1000", "--json"])
        .arg(&json)
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "stdout:\n{stdout}");
    assert!(lines[0].starts_with("Setting properties finished in : "));
    assert!(json.exists());
}

#[test]
fn unknown_suite_exits_with_error() {
    let output = speedtest()
        .args(["--suite", "missing"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown suite 'missing'"));
}

fn write_config(dir: &std::path::Path, yaml: &str) -> std::path::PathBuf {
    let path = dir.join("speedtest.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn suite_flag_replaces_configured_selection() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        dir.path(),
        "iterations: 100\nsuites: [string_concat]\noverrides:\n  string_concat: 5\n",
    );
    let output = speedtest()
        .arg("--config")
        .arg(&config)
        .args(["--suite", "debug_log"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout:\n{stdout}");
    assert!(lines[0].starts_with("Just a string test finished in : "));
}

#[test]
fn iterations_flag_overrides_configured_count() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "iterations: 100\nsuites: [debug_log]\n");
    let json = dir.path().join("report.json");
    let output = speedtest()
        .arg("--config")
        .arg(&config)
        .args(["--iterations", "7", "--json"])
        .arg(&json)
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["iterations"], 7);
    assert_eq!(value["measurements"][0]["iterations"], 7);
}

#[test]
fn zero_iterations_rejected_after_config_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "iterations: 100\nsuites: [debug_log]\n");
    let output = speedtest()
        .arg("--config")
        .arg(&config)
        .args(["--iterations", "0"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("iterations must be greater than zero"));
}

#[test]
fn unknown_suite_next_to_all_is_rejected() {
    let output = speedtest()
        .args(["--suite", "all", "--suite", "bogus", "--iterations", "10"])
        .output()
        .expect("binary runs");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown suite 'bogus'"));
}
