use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn normalizer(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("normalizer").unwrap();
    cmd.env("NORMALIZER_CONFIG_DIR", config_dir.path())
        .env("RUST_LOG", "info");
    cmd
}

#[test]
fn test_transform_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.csv");
    let output = temp_dir.path().join("output.csv");
    std::fs::write(
        &input,
        "\u{feff}Total Assets,\"$12,000.00\"\nTotal Liabilities,500\nTotal Security Deposits,50\nheader only\n",
    )
    .unwrap();

    normalizer(&temp_dir)
        .arg("transform")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully transformed data"))
        .stderr(predicate::str::contains("Skipping row 4"));

    let written = std::fs::read_to_string(&output).unwrap();
    let mut reader = csv::Reader::from_reader(written.as_bytes());
    let headers = reader.headers().unwrap().clone();
    let record = reader.records().next().unwrap().unwrap();

    let cell = |name: &str| {
        let idx = headers.iter().position(|h| h == name).unwrap();
        record[idx].to_string()
    };
    assert_eq!(cell("Filename"), "input.csv");
    assert_eq!(cell("Total Assets"), "$12000.00");
    assert_eq!(cell("Total Current Liabilites"), "$450.00");
    assert_eq!(cell("Total Long-Term Liabilites"), "$50.00");
    assert_eq!(cell("Net Income"), "$0.00");
    assert_eq!(record.len(), 14);
}

#[test]
fn test_transform_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("output.csv");

    normalizer(&temp_dir)
        .arg("transform")
        .arg(temp_dir.path().join("nope.csv"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.csv"));

    assert!(!output.exists());
}

#[test]
fn test_batch_directory_with_unreadable_entry() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("statements");
    std::fs::create_dir(&input_dir).unwrap();
    std::fs::write(input_dir.join("a.csv"), "net income,1000.00\n").unwrap();
    std::fs::create_dir(input_dir.join("b.csv")).unwrap();
    let output = temp_dir.path().join("consolidated.csv");

    normalizer(&temp_dir)
        .arg("batch")
        .arg(&input_dir)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed 2 CSV file(s)."))
        .stderr(predicate::str::contains("Processing file: a.csv"));

    let written = std::fs::read_to_string(&output).unwrap();
    let mut reader = csv::Reader::from_reader(written.as_bytes());
    let headers = reader.headers().unwrap().clone();
    let net_income = headers.iter().position(|h| h == "Net Income").unwrap();

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);

    for row in &rows {
        assert_eq!(row.len(), 14);
        for (i, cell) in row.iter().enumerate().skip(1) {
            let expected = if &row[0] == "a.csv" && i == net_income {
                "$1000.00"
            } else {
                "$0.00"
            };
            assert_eq!(cell, expected);
        }
    }
}

#[test]
fn test_batch_empty_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("empty");
    std::fs::create_dir(&input_dir).unwrap();
    let output = temp_dir.path().join("consolidated.csv");

    normalizer(&temp_dir)
        .arg("batch")
        .arg(&input_dir)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No CSV files found"));

    assert!(!output.exists());
}

#[test]
fn test_batch_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    normalizer(&temp_dir)
        .arg("batch")
        .arg(temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found or is not a directory"));
}

#[test]
fn test_formulas_listing() {
    let temp_dir = TempDir::new().unwrap();

    normalizer(&temp_dir)
        .arg("formulas")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "4. Net Income  <-  Net Income (direct)",
        ))
        .stdout(predicate::str::contains(
            "13. Total Owners' Equity  <-  Total Capital (direct)",
        ));
}

#[test]
fn test_config_init_writes_settings() {
    let temp_dir = TempDir::new().unwrap();

    normalizer(&temp_dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview rows:           5"));

    assert!(temp_dir.path().join("config.json").exists());
}
