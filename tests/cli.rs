//! End-to-end tests driving the fintrack binary
//!
//! Each test gets its own data directory via FINTRACK_DATA_DIR so runs are
//! isolated and leave nothing behind.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_and_list_transaction() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args([
            "transaction", "add", "12.50", "--category", "Food", "--date", "2024-05-10",
            "--note", "lunch",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded transaction txn-"));

    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$12.50"));
}

#[test]
fn rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["transaction", "add", "0", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive"));
}

#[test]
fn list_filters_by_kind_and_search() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args([
            "transaction", "add", "1000", "--kind", "income", "--category", "Salary",
            "--date", "2024-05-01",
        ])
        .assert()
        .success();
    fintrack(&dir)
        .args([
            "transaction", "add", "40", "--category", "Transport", "--date", "2024-05-02",
            "--note", "bus pass",
        ])
        .assert()
        .success();

    fintrack(&dir)
        .args(["transaction", "list", "--kind", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Transport").not());

    fintrack(&dir)
        .args(["transaction", "list", "--search", "BUS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn delete_absent_transaction_is_noop() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args([
            "transaction", "delete", "550e8400-e29b-41d4-a716-446655440000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing deleted"));
}

#[test]
fn budget_set_and_list() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "set", "Rent", "800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget for 'Rent' set to $800.00"));

    fintrack(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        // Default seed categories plus the new one
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Rent"));

    fintrack(&dir)
        .args(["budget", "remove", "Rent"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["budget", "remove", "Rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget not found"));
}

#[test]
fn goal_lifecycle() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["goal", "add", "Laptop", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal goal-"));

    fintrack(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop"))
        .stdout(predicate::str::contains("0% complete"));
}

#[test]
fn dashboard_and_analytics_render() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard"))
        .stdout(predicate::str::contains("Budget Limits"));

    fintrack(&dir)
        .args(["analytics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income vs Expense Trend"))
        .stdout(predicate::str::contains("spent the most on nothing"));
}

#[test]
fn export_import_roundtrip() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("backup.json");

    fintrack(&dir)
        .args([
            "transaction", "add", "250", "--category", "Shopping", "--date", "2024-05-05",
        ])
        .assert()
        .success();

    fintrack(&dir)
        .args(["export", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    // Wipe, then restore from the backup
    fintrack(&dir)
        .args(["reset", "--force"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["import"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 transactions"));

    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping"));
}

#[test]
fn import_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json {").unwrap();

    fintrack(&dir)
        .args(["import"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid backup file"));

    // Prior (seed) state is intact
    fintrack(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn csv_export_has_expected_header() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    fintrack(&dir)
        .args([
            "transaction", "add", "19.99", "--category", "Entertainment",
            "--date", "2024-05-07", "--note", "cinema, popcorn",
        ])
        .assert()
        .success();

    fintrack(&dir)
        .args(["export", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Date,Type,Category,Amount,Note\n"));
    assert!(csv.contains("2024-05-07,EXPENSE,Entertainment,19.99,\"cinema, popcorn\""));
}

#[test]
fn reset_requires_force() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args([
            "transaction", "add", "10", "--category", "Food", "--date", "2024-05-01",
        ])
        .assert()
        .success();

    fintrack(&dir)
        .args(["reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    // Data survived the unconfirmed reset
    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn theme_toggles() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    fintrack(&dir)
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));
}
