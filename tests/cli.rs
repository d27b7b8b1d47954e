//! End-to-end CLI tests
//!
//! Each test runs the binary against a fresh data directory via the
//! FINPLAN_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finplan(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finplan").unwrap();
    cmd.env("FINPLAN_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn income_add_and_list() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "add", "100", "job", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income: $100.00 from job"));

    finplan(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("job"))
        .stdout(predicate::str::contains("$100.00"));
}

#[test]
fn income_edit_replaces_by_position() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "add", "100", "job", "--date", "2024-01-01"])
        .assert()
        .success();

    finplan(&dir)
        .args(["income", "edit", "0", "250", "bonus", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated income at position 0"));

    finplan(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bonus"))
        .stdout(predicate::str::contains("$250.00").and(predicate::str::contains("job").not()));
}

#[test]
fn malformed_date_is_a_validation_error() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "add", "100", "job", "--date", "01/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}

#[test]
fn negative_amount_is_a_validation_error() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["expense", "add", "-5", "food", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount"));
}

#[test]
fn summary_report_end_to_end() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "add", "100", "job", "--date", "2024-01-01"])
        .assert()
        .success();
    finplan(&dir)
        .args(["expense", "add", "40", "food", "-m", "desc", "--date", "2024-01-02"])
        .assert()
        .success();

    finplan(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:        $60.00"))
        .stdout(predicate::str::contains("Savings rate:   60.00%"));
}

#[test]
fn budget_status_end_to_end() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["budget", "set", "food", "50"])
        .assert()
        .success();
    finplan(&dir)
        .args(["expense", "add", "40", "food", "--date", "2024-01-02"])
        .assert()
        .success();

    finplan(&dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40.00"))
        .stdout(predicate::str::contains("$10.00"))
        .stdout(predicate::str::contains("80%"));
}

#[test]
fn investment_report_and_unknown_kind() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args([
            "investment", "add", "1000", "stocks", "--return", "120", "--date", "2024-03-01",
        ])
        .assert()
        .success();
    finplan(&dir)
        .args(["investment", "add", "1000", "crypto", "--date", "2024-03-02"])
        .assert()
        .success();

    finplan(&dir)
        .args(["report", "investments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total invested: $2000.00"))
        .stdout(predicate::str::contains("crypto"))
        // stocks at 12% diluted by un-policied crypto -> blended 6%
        .stdout(predicate::str::contains("Expected return: 6.00%"));
}

#[test]
fn allocation_suggestion_end_to_end() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["income", "add", "1000", "job", "--date", "2024-01-01"])
        .assert()
        .success();

    finplan(&dir)
        .args(["investment", "suggest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available: $1000.00"))
        .stdout(predicate::str::contains("emergency fund"))
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("$2.00"));
}

#[test]
fn export_csv_contains_records() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("ledger.csv");

    finplan(&dir)
        .args(["income", "add", "100", "job", "--date", "2024-01-01"])
        .assert()
        .success();

    finplan(&dir)
        .args(["export", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.contains("income,2024-01-01,,job"));
}

#[test]
fn report_on_empty_ledger_succeeds() {
    let dir = TempDir::new().unwrap();

    finplan(&dir)
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets set"))
        .stdout(predicate::str::contains("No expenses recorded"))
        .stdout(predicate::str::contains("No investments recorded"));
}
