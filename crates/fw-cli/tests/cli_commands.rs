//! Integration tests driving the `fw` binary end to end.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use fw_content::sample_game;

fn fw() -> Command {
    Command::cargo_bin("fw").unwrap()
}

/// Write the sample game definition to a temp file and return both.
fn sample_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("game.json");
    let json = serde_json::to_string_pretty(&sample_game()).unwrap();
    fs::write(&path, json).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_a_valid_game() {
    let (_dir, path) = sample_file();
    fw().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'Sample Game'"))
        .stdout(predicate::str::contains("2 rooms, 1 items, 1 NPCs"));
}

#[test]
fn check_reports_every_broken_reference() {
    let mut definition = sample_game();
    {
        let start = definition.rooms.get_mut("start").unwrap();
        start.exits[0].room_id = "missing_room".to_string();
        start.items.push("missing_item".to_string());
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, serde_json::to_string_pretty(&definition).unwrap()).unwrap();

    fw().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing_room"))
        .stderr(predicate::str::contains("missing_item"))
        .stderr(predicate::str::contains("2 validation errors"));
}

#[test]
fn check_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "{ not json").unwrap();

    fw().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn check_rejects_a_missing_file() {
    fw().arg("check")
        .arg("does/not/exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ---------------------------------------------------------------------------
// info
// ---------------------------------------------------------------------------

#[test]
fn info_defaults_to_the_sample_game() {
    fw().arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Game v1.0.0"))
        .stdout(predicate::str::contains("by Test Author"))
        .stdout(predicate::str::contains("Starting Room (start)"))
        .stdout(predicate::str::contains("2 rooms, 1 items, 1 NPCs"));
}

#[test]
fn info_reads_a_definition_file() {
    let (_dir, path) = sample_file();
    fw().arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Northern Room"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_runs_a_scripted_session() {
    fw().arg("play")
        .write_stdin("look\ntake key\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Sample Game!"))
        .stdout(predicate::str::contains("You can see: key"))
        .stdout(predicate::str::contains("You pick up the brass key."))
        .stdout(predicate::str::contains("You are carrying: brass key"))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn play_ends_cleanly_on_eof() {
    fw().arg("play")
        .write_stdin("look\n")
        .assert()
        .success();
}

#[test]
fn play_survives_nonsense_input() {
    fw().arg("play")
        .write_stdin("dance wildly\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand"));
}

#[test]
fn play_saves_and_restores_a_session() {
    let dir = TempDir::new().unwrap();
    let save_path = dir.path().join("save.json");
    let save = save_path.display();

    fw().arg("play")
        .write_stdin(format!("take key\ngo north\nsave {save}\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved."));

    let saved = fs::read_to_string(&save_path).unwrap();
    assert!(saved.contains("\"currentRoomId\": \"north_room\""));
    assert!(saved.contains("key"));

    fw().arg("play")
        .write_stdin(format!("restore {save}\ninventory\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored."))
        .stdout(predicate::str::contains("You are carrying: brass key"));
}

#[test]
fn play_rejects_an_invalid_definition() {
    let mut definition = sample_game();
    definition.metadata.starting_room_id = "nowhere".to_string();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, serde_json::to_string_pretty(&definition).unwrap()).unwrap();

    fw().arg("play")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation failed"));
}

// ---------------------------------------------------------------------------
// top level
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    fw().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Play a game interactively"))
        .stdout(predicate::str::contains("Validate a game definition"));
}
