use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_with_references, setup_workspace};

#[test]
fn test_init_creates_config_and_ledger() {
    let ws = setup_workspace("init");

    ws.ct().args(["init"]).assert().success();

    let conf = ws.home.join(".coachtrack").join("coachtrack.conf");
    assert!(conf.exists(), "config file should be created");
    let yaml = fs::read_to_string(&conf).unwrap();
    assert!(yaml.contains("ledger_file: data.csv"));

    assert_eq!(
        ws.ledger_content().trim_end(),
        "Date,Name,Action,Time,Field Name,Status,Clock In Time,Clock Out Time,Hours Spent"
    );

    // second run keeps existing data
    ws.clock_in("Alice", "North", "2025-05-10 09:00");
    ws.ct().args(["init"]).assert().success();
    assert_eq!(ws.ledger_rows().len(), 1);
}

#[test]
fn test_backup_plain_and_compressed() {
    let ws = setup_with_references("backup");
    ws.clock_in("Alice", "North", "2025-05-10 09:00");

    let plain = ws.out_file("copy.csv");
    ws.ct()
        .args(["backup", "--file", plain.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(fs::read_to_string(&plain).unwrap(), ws.ledger_content());

    let zipped = ws.out_file("archive.csv");
    ws.ct()
        .args(["backup", "--file", zipped.to_str().unwrap(), "--compress"])
        .assert()
        .success();
    assert!(ws.out_file("archive.zip").exists());
    assert!(!zipped.exists());
}

#[test]
fn test_compressed_backup_leaves_existing_file_alone() {
    let ws = setup_with_references("backup_keep_existing");
    ws.clock_in("Alice", "North", "2025-05-10 09:00");

    let existing = ws.out_file("keep.csv");
    common::write_file(&existing, "precious user data");

    ws.ct()
        .args(["backup", "--file", existing.to_str().unwrap(), "--compress"])
        .assert()
        .success();

    assert!(ws.out_file("keep.zip").exists());
    assert_eq!(fs::read_to_string(&existing).unwrap(), "precious user data");
}

#[test]
fn test_config_edit_fails_when_no_editor_runs() {
    let ws = setup_workspace("config_edit_no_editor");
    ws.ct().args(["init"]).assert().success();

    ws.ct()
        .env("EDITOR", "/nonexistent/coachtrack-editor")
        .env_remove("VISUAL")
        .args(["config", "--edit", "--editor", "/nonexistent/other-editor"])
        .assert()
        .failure()
        .stderr(contains("failed to edit configuration file"));
}

#[test]
fn test_backup_without_ledger_fails() {
    let ws = setup_with_references("backup_missing");
    let dest = ws.out_file("copy.csv");

    ws.ct()
        .args(["backup", "--file", dest.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Ledger not found"));
}

#[test]
fn test_export_csv_and_json() {
    let ws = setup_with_references("export");
    ws.clock_in("Alice", "North", "2025-05-10 09:00");
    ws.clock_out("Alice", "North", "2025-05-10 11:30");

    let csv_out = ws.out_file("export.csv");
    ws.ct()
        .args(["export", "--format", "csv", "--file", csv_out.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&csv_out).unwrap(), ws.ledger_content());

    let json_out = ws.out_file("export.json");
    ws.ct()
        .args(["export", "--format", "json", "--file", json_out.to_str().unwrap()])
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    let first = &parsed.as_array().unwrap()[0];
    assert_eq!(first["name"], "Alice");
    assert_eq!(first["action"], "Clocked In/Out");
    assert_eq!(first["status"], "Correct Field");
    assert_eq!(first["hours_spent"], 2.5);

    // existing file, --force overwrites without asking
    ws.ct()
        .args([
            "export",
            "--format",
            "json",
            "--file",
            json_out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();
}

#[test]
fn test_log_records_operations() {
    let ws = setup_with_references("activity_log");
    ws.clock_in("Alice", "North", "2025-05-10 09:00");
    ws.clock_out("Alice", "North", "2025-05-10 10:00");

    ws.ct()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("clock_in"))
        .stdout(contains("clock_out"))
        .stdout(contains("Clock Out at North after 1 h"));
}
