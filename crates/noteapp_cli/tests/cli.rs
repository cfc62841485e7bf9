use std::path::Path;
use std::process::{Command, Output};

fn noteapp(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_noteapp"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn list_json(data_dir: &Path) -> Vec<serde_json::Value> {
    let output = noteapp(data_dir, &["list", "--json"]);
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn add_prints_saved_message_and_id() {
    let dir = tempfile::tempdir().unwrap();

    let output = noteapp(
        dir.path(),
        &["add", "-n", " Al ", "-e", " AL@X.IO ", "--notes", "hi"],
    );
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Entry saved successfully.", "id=1"]
    );

    let entries = list_json(dir.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[0]["name"], "Al");
    assert_eq!(entries[0]["email"], "al@x.io");
    assert_eq!(entries[0]["notes"], "hi");
}

#[test]
fn rejected_add_prints_every_message_and_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = noteapp(dir.path(), &["add"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Name is required.",
            "Email is required.",
            "Notes are required."
        ]
    );
    assert!(list_json(dir.path()).is_empty());
}

#[test]
fn update_of_missing_id_reports_not_found_and_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = noteapp(
        dir.path(),
        &["update", "9", "-n", "Bo", "-e", "bo@x.io", "--notes", "n"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_lines(&output), vec!["Entry not found."]);
}

#[test]
fn update_replaces_fields_of_existing_entry() {
    let dir = tempfile::tempdir().unwrap();
    noteapp(dir.path(), &["add", "-n", "Old", "-e", "o@x.io", "--notes", "a"]);

    let output = noteapp(
        dir.path(),
        &["update", "1", "-n", "New", "-e", "NEW@X.IO", "--notes", "b"],
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Entry updated successfully."]);

    let entries = list_json(dir.path());
    assert_eq!(entries[0]["name"], "New");
    assert_eq!(entries[0]["email"], "new@x.io");
}

#[test]
fn delete_then_delete_again() {
    let dir = tempfile::tempdir().unwrap();
    noteapp(dir.path(), &["add", "-n", "Del", "-e", "d@x.io", "--notes", "n"]);

    let first = noteapp(dir.path(), &["delete", "1"]);
    assert!(first.status.success());
    assert_eq!(stdout_lines(&first), vec!["Entry deleted."]);

    let second = noteapp(dir.path(), &["delete", "1"]);
    assert_eq!(second.status.code(), Some(1));
    assert_eq!(stdout_lines(&second), vec!["Entry not found."]);
    assert!(list_json(dir.path()).is_empty());
}

#[test]
fn every_command_initializes_storage() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("nested").join("data");

    let output = noteapp(&data_dir, &["list"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["no entries"]);
    assert!(data_dir.join("entries.db").is_file());
}

#[test]
fn list_json_has_entry_fields_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    noteapp(dir.path(), &["add", "-n", "A", "-e", "a@x.io", "--notes", "1"]);
    noteapp(dir.path(), &["add", "-n", "B", "-e", "b@x.io", "--notes", "2"]);

    let entries = list_json(dir.path());
    assert_eq!(entries.len(), 2);
    for entry in &entries {
        for field in ["id", "name", "email", "notes", "created_at"] {
            assert!(entry.get(field).is_some(), "missing field {field}");
        }
    }
    let created: Vec<&str> = entries
        .iter()
        .map(|entry| entry["created_at"].as_str().unwrap())
        .collect();
    assert!(created[0] >= created[1]);
}

#[test]
fn log_level_without_log_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let output = noteapp(dir.path(), &["--log-level", "bogus", "list"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("entries.db").exists());
}

#[test]
fn unsupported_log_level_fails_before_touching_storage() {
    let dir = tempfile::tempdir().unwrap();
    let log_dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_noteapp"))
        .arg("--data-dir")
        .arg(dir.path())
        .arg("--log-dir")
        .arg(log_dir.path())
        .args(["--log-level", "bogus", "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!dir.path().join("entries.db").exists());
}
