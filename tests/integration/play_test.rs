//! Integration tests for the play subcommand.
//!
//! Interactive playback needs a TTY, which the test harness does not have;
//! these tests exercise the guards around the session instead.

use predicates::prelude::*;

use super::helpers::{temp_fixture, temp_lesson, vlp};

#[test]
fn play_requires_file_or_demo() {
    vlp().arg("play").assert().failure().code(2);
}

#[test]
fn play_demo_refuses_non_tty() {
    vlp()
        .arg("play")
        .arg("--demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

#[test]
fn play_fails_on_missing_file() {
    vlp()
        .arg("play")
        .arg("/nonexistent/lesson.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load lesson"));
}

#[test]
fn play_fails_on_malformed_lesson_before_touching_terminal() {
    let (_dir, path) = temp_lesson(r#"{"skips": "oops"}"#);

    vlp()
        .arg("play")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load lesson"));
}

#[test]
fn play_accepts_valid_lesson_up_to_tty_guard() {
    // With a valid lesson the only remaining obstacle is the TTY check,
    // proving the file was parsed successfully
    let (_dir, path) = temp_fixture("sample.lesson.json");

    vlp()
        .arg("play")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
