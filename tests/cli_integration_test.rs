//! CLI integration tests: run the casetool binary to cover main.rs branches.
//! Uses CARGO_BIN_EXE_casetool when set (e.g. by `cargo test`).

use std::process::Command;

const RESIDENCY_YAML: &str = "tests/fixtures/residency.yaml";
const CYCLIC_YAML: &str = "tests/fixtures/cyclic.yaml";

fn bin() -> Option<std::path::PathBuf> {
    std::env::var_os("CARGO_BIN_EXE_casetool").map(std::path::PathBuf::from)
}

fn run(args: &[&str]) -> Option<std::process::Output> {
    let Some(bin) = bin() else {
        eprintln!("Skipping CLI test: CARGO_BIN_EXE not set");
        return None;
    };
    Some(Command::new(bin).args(args).output().expect("run casetool"))
}

#[test]
fn test_cli_help_succeeds() {
    let Some(out) = run(&["--help"]) else { return };
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("casetool"));
    assert!(stdout.contains("cases"));
}

#[test]
fn test_cli_load_error_when_file_missing() {
    let Some(out) = run(&["nonexistent_questionnaire_12345.yaml", "summary"]) else {
        return;
    };
    assert!(!out.status.success(), "expected failure when file missing");
}

#[test]
fn test_cli_summary() {
    let Some(out) = run(&[RESIDENCY_YAML, "summary"]) else { return };
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Questions: 2"));
    assert!(stdout.contains("Answers: 5"));
    assert!(stdout.contains("Child links: 2"));
}

#[test]
fn test_cli_cases_json() {
    let Some(out) = run(&[RESIDENCY_YAML, "cases", "--mode", "collapse", "--json"]) else {
        return;
    };
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(report["mode"], "collapse");
    assert_eq!(report["enumerated_paths"], 5);
    assert_eq!(report["cases"].as_array().unwrap().len(), 3);
    assert_eq!(report["cases"][0]["footprint"][0], "1");
    assert_eq!(report["cases"][2]["footprint"][0], "1r");
}

#[test]
fn test_cli_cases_text_trim() {
    let Some(out) = run(&[RESIDENCY_YAML, "cases"]) else { return };
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Mode: trim"));
    assert!(stdout.contains("Cases: 2"));
    assert!(stdout.contains("Resident -> Adult"));
    assert!(!stdout.contains("Foreigner"));
}

#[test]
fn test_cli_unknown_mode_fails() {
    let Some(out) = run(&[RESIDENCY_YAML, "cases", "--mode", "merge"]) else {
        return;
    };
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("merge"));
}

#[test]
fn test_cli_paths_json() {
    let Some(out) = run(&[RESIDENCY_YAML, "paths", "--json"]) else {
        return;
    };
    assert!(out.status.success());
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(report["path_count"], 5);
    assert_eq!(report["paths"][0]["display"], "0 -> 3");
    assert_eq!(report["paths"][4]["ends_in_rejection"], true);
}

#[test]
fn test_cli_check_clean_and_cyclic() {
    let Some(out) = run(&[RESIDENCY_YAML, "check"]) else { return };
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("no structural findings"));

    let Some(out) = run(&[CYCLIC_YAML, "check"]) else { return };
    assert!(!out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("cycle"));
}

#[test]
fn test_cli_cyclic_cases_fail() {
    let Some(out) = run(&[CYCLIC_YAML, "cases"]) else { return };
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("own ancestor"));
}

#[test]
fn test_cli_debug_graph() {
    let Some(out) = run(&[RESIDENCY_YAML, "debug-graph"]) else {
        return;
    };
    assert!(out.status.success());
    let dump: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(dump["questions"].as_array().unwrap().len(), 2);
    assert_eq!(dump["results"].as_array().unwrap().len(), 3);
}
