//! Command-line tests for the `tally` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir.path()).env_remove("RUST_LOG");
    cmd
}

fn seed(data_dir: &TempDir, backend: &str) {
    for args in [
        ["add", "income", "Salary", "5000", "--date", "2025-01-01"],
        ["add", "expense", "Food", "1200", "--date", "2025-01-02"],
        ["add", "expense", "Food", "300", "--date", "2025-01-03"],
    ] {
        tally(data_dir)
            .args(["--backend", backend])
            .args(args)
            .assert()
            .success();
    }
}

#[test]
fn no_command_prints_hint() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("tally --help"));
}

#[test]
fn first_run_writes_settings() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir).arg("config").assert().success();
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn list_empty_ledger() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn savings_after_salary_and_food() {
    for backend in ["json", "sqlite"] {
        let data_dir = TempDir::new().unwrap();
        seed(&data_dir, backend);

        tally(&data_dir)
            .args(["--backend", backend, "savings"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total Savings: 3500.00"));
    }
}

#[test]
fn budget_check_reports_over() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, "json");

    tally(&data_dir)
        .args(["budget", "set", "Food", "1000"])
        .assert()
        .success();

    tally(&data_dir)
        .args(["budget", "check", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("over budget"));

    tally(&data_dir)
        .args(["budget", "check", "Rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set for 'Rent'"));

    tally(&data_dir)
        .args(["budget", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVER"));
}

#[test]
fn negative_amount_rejected() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir)
        .args(["add", "expense", "Food", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be positive"));

    tally(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn unknown_kind_rejected() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir)
        .args(["add", "transfer", "Food", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transaction type"));
}

#[test]
fn zero_budget_rejected() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir)
        .args(["budget", "set", "Food", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("budget must be positive"));
}

#[test]
fn list_shows_recorded_rows() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, "sqlite");

    tally(&data_dir)
        .args(["--backend", "sqlite", "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-03"))
        .stdout(predicate::str::contains("2025-01-01").not());
}

#[test]
fn csv_export_to_file() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir, "json");
    let out = data_dir.path().join("ledger.csv");

    tally(&data_dir)
        .args(["export", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("ID,Date,Type,Category,Amount"));
    assert!(text.contains("2,2025-01-02,Expense,Food,1200.00"));
}

#[test]
fn categories_lists_suggestions() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Entertainment"));
}

#[test]
fn unknown_kind_reported_before_bad_amount() {
    let data_dir = TempDir::new().unwrap();
    tally(&data_dir)
        .args(["add", "transfer", "Food", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transaction type"));
}

#[test]
fn bad_date_format_in_config_fails_cleanly() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"date_format": "%Q"}"#,
    )
    .unwrap();

    tally(&data_dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"))
        .stderr(predicate::str::contains("panicked").not());
}
