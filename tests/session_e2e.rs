use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::prelude::*;
use std::path::Path;

fn ostap(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ostap").unwrap();
    cmd.env("OSTAP_HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_and_list_notes() {
    let temp_dir = tempfile::tempdir().unwrap();

    ostap(temp_dir.path())
        .write_stdin("add note buy milk #errand\nshow all notes\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 1000 added successfully."))
        .stdout(predicate::str::contains("[1000] buy milk #errand"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_typo_suggests_command() {
    let temp_dir = tempfile::tempdir().unwrap();

    ostap(temp_dir.path())
        .write_stdin("chagne phone Bob 380501234567 380671112233\nzq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Perhaps you meant 'change phone'."))
        .stdout(predicate::str::contains("To view all available commands, enter 'help'."));

    // The suggestion is never executed.
    assert!(!temp_dir.path().join("data.json").exists());
}

#[test]
fn test_data_persists_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();

    ostap(temp_dir.path())
        .write_stdin(
            "add record Bob 380501234567 15.06.1990 Sadova Lviv Ukraine 79000 bob@mail.com\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("User Bob added successfully."));

    let saved = std::fs::read_to_string(temp_dir.path().join("data.json")).unwrap();
    assert!(saved.contains("\"Bob\""));
    assert!(saved.contains("bob@mail.com"));

    ostap(temp_dir.path())
        .write_stdin("show phone Bob\nshow email Bob\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone numbers for Bob: 380501234567."))
        .stdout(predicate::str::contains("Email for Bob: bob@mail.com."));
}

#[test]
fn test_invalid_input_keeps_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();

    ostap(temp_dir.path())
        .write_stdin("add phone Nobody 12345\nshow nearbday 0\nadd note still here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid phone number"))
        .stdout(predicate::str::contains("'0' is not a valid number"))
        .stdout(predicate::str::contains("Note 1000 added successfully."))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_config_changes_file_names() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "notes_file": "my-notes.json" }"#,
    )
    .unwrap();

    ostap(temp_dir.path())
        .write_stdin("add note configured\n")
        .assert()
        .success();

    assert!(temp_dir.path().join("my-notes.json").exists());
    assert!(!temp_dir.path().join("notebook.json").exists());
}

#[test]
fn test_version_flag() {
    let temp_dir = tempfile::tempdir().unwrap();

    ostap(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ostap"));
}
