//! End-to-end tests for the `ingest` command.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

const HEADER: &str = "account;category;currency;amount;ref_currency_amount;\
    type;payment_type;note;date;transfer;payee;labels";

fn sample_export() -> String {
    format!(
        "{HEADER}\n\
         Intesa Sanpaolo;Carburante;EUR;72.00;72.00;Uscita;Carta debito;;2025-12-21T13:05:33.120Z;false;Eni;Benzina\n\
         \n\
         Cash;Groceries;EUR;abc;12.30;Uscita;;;2025-12-22T09:00:00Z;false;;food, weekly\n\
         too;few;fields\n"
    )
}

#[test]
fn ingest_emits_one_json_line_per_valid_row() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("export.csv");
    fs::write(&input, sample_export()).expect("write export");

    let output = Command::cargo_bin("budget-bridge")
        .expect("binary exists")
        .args(["ingest", "-i", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Intesa Sanpaolo"))
        .stdout(contains("\"trans_type\":\"USCITA\""));

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    // Blank line and short row are skipped; two records survive.
    assert_eq!(stdout.lines().count(), 2);
    // The dirty amount cell surfaces as an explicit null, not a crash.
    let second = stdout.lines().nth(1).expect("second record");
    assert!(second.contains("\"amount\":null"));
    assert!(second.contains("\"labels\":[\"food\",\"weekly\"]"));
}

#[test]
fn ingest_writes_to_output_file_when_requested() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("export.csv");
    let output = dir.path().join("records.jsonl");
    fs::write(&input, sample_export()).expect("write export");

    Command::cargo_bin("budget-bridge")
        .expect("binary exists")
        .args([
            "ingest",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let data = fs::read_to_string(&output).expect("read output");
    assert_eq!(data.lines().count(), 2);
}

#[test]
fn ingest_honors_record_limit() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("export.csv");
    fs::write(&input, sample_export()).expect("write export");

    let output = Command::cargo_bin("budget-bridge")
        .expect("binary exists")
        .args(["ingest", "-i", input.to_str().unwrap(), "--limit", "1"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn ingest_rejects_renamed_header_column_before_any_row() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("export.csv");
    let drifted =
        sample_export().replace("amount;ref_currency_amount", "sum;ref_currency_amount");
    fs::write(&input, drifted).expect("write export");

    Command::cargo_bin("budget-bridge")
        .expect("binary exists")
        .args(["ingest", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("column 3"))
        .stderr(contains("'amount'"));
}

#[test]
fn ingest_rejects_header_with_missing_columns() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("export.csv");
    fs::write(&input, "account;category;currency\n").expect("write export");

    Command::cargo_bin("budget-bridge")
        .expect("binary exists")
        .args(["ingest", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("count mismatch"));
}

#[test]
fn ingest_fails_on_empty_file() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("export.csv");
    fs::write(&input, "").expect("write empty file");

    Command::cargo_bin("budget-bridge")
        .expect("binary exists")
        .args(["ingest", "-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("empty"));
}
