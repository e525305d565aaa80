//! End-to-end CLI tests against the rosters in `tests/fixtures/`.
//!
//! Each fixture directory holds:
//! - `roster.csv`
//! - an optional `orgguard.toml`
//! - `expected.report.json` (timestamps and version replaced by placeholders)
//!
//! The CLI runs against each fixture and the test checks:
//! 1. Exit code matches the verdict (0 = pass/warn, 2 = fail)
//! 2. JSON output matches the expected report after normalization

use assert_cmd::Command;
use orgguard_test_util::normalize_nondeterministic;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn orgguard_cmd() -> Command {
    Command::cargo_bin("orgguard").expect("orgguard binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("orgguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `check` on a fixture and return the exit code and the written report.
fn run_check_on_fixture(fixture_name: &str) -> (i32, Value) {
    let fixture_path = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = orgguard_cmd()
        .arg("--config")
        .arg(fixture_path.join("orgguard.toml"))
        .arg("check")
        .arg("--roster")
        .arg(fixture_path.join("roster.csv"))
        .arg("--report-out")
        .arg(&report_path)
        .arg("--format")
        .arg("none")
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    let content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&content).expect("Failed to parse report JSON");
    (exit_code, report)
}

fn load_expected_report(fixture_name: &str) -> Value {
    let path = fixtures_dir()
        .join(fixture_name)
        .join("expected.report.json");
    let content = std::fs::read_to_string(&path).expect("Failed to read expected report");
    serde_json::from_str(&content).expect("Failed to parse expected report")
}

fn assert_reports_match(actual: Value, expected: Value, fixture_name: &str) {
    let actual = normalize_nondeterministic(actual);
    let expected = normalize_nondeterministic(expected);

    assert_eq!(
        actual,
        expected,
        "Report mismatch for fixture '{}'.\n\nActual:\n{}\n\nExpected:\n{}",
        fixture_name,
        serde_json::to_string_pretty(&actual).unwrap(),
        serde_json::to_string_pretty(&expected).unwrap()
    );
}

#[test]
fn fixture_canonical_fails() {
    let (exit_code, report) = run_check_on_fixture("canonical");
    assert_eq!(exit_code, 2, "canonical fixture should exit with 2 (fail)");
    assert_reports_match(report, load_expected_report("canonical"), "canonical");
}

#[test]
fn fixture_balanced_passes() {
    let (exit_code, report) = run_check_on_fixture("balanced");
    assert_eq!(exit_code, 0, "balanced fixture should exit with 0 (pass)");
    assert_reports_match(report, load_expected_report("balanced"), "balanced");
}

#[test]
fn fixture_long_chain_warns() {
    let (exit_code, report) = run_check_on_fixture("long_chain");
    assert_eq!(exit_code, 0, "advisory findings should not fail the run");
    assert_eq!(report["verdict"], "warn");
    assert_reports_match(report, load_expected_report("long_chain"), "long_chain");
}

#[test]
fn fixture_cycle_fails() {
    let (exit_code, report) = run_check_on_fixture("cycle");
    assert_eq!(exit_code, 2, "cycle fixture should exit with 2 (fail)");

    let codes: Vec<&str> = report["findings"]
        .as_array()
        .expect("findings should be array")
        .iter()
        .map(|f| f["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["reporting_cycle", "manager_underpaid"]);

    assert_reports_match(report, load_expected_report("cycle"), "cycle");
}

#[test]
fn fixture_truncated_keeps_per_code_totals() {
    let (exit_code, report) = run_check_on_fixture("truncated");
    assert_eq!(exit_code, 2, "truncated fixture should exit with 2 (fail)");
    assert_eq!(report["data"]["findings_emitted"], 1);
    assert_eq!(report["data"]["code_totals"]["manager_underpaid"], 1);
    assert_eq!(report["data"]["code_totals"]["reporting_line_too_long"], 2);
    assert_reports_match(report, load_expected_report("truncated"), "truncated");
}

#[test]
fn fixture_disabled_check_records_what_ran() {
    let (exit_code, report) = run_check_on_fixture("disabled_check");
    assert_eq!(exit_code, 2, "salary band finding still fails the run");
    assert_eq!(
        report["data"]["checks_run"],
        serde_json::json!(["org.salary_band"])
    );
    assert_reports_match(
        report,
        load_expected_report("disabled_check"),
        "disabled_check",
    );
}

#[test]
fn fixture_reports_are_stable_across_runs() {
    let (_, first) = run_check_on_fixture("long_chain");
    let (_, second) = run_check_on_fixture("long_chain");
    assert_eq!(
        normalize_nondeterministic(first),
        normalize_nondeterministic(second)
    );
}
