//! Integration tests for the info subcommand.

use predicates::prelude::*;

use super::helpers::{temp_fixture, temp_lesson, vlp};

#[test]
fn info_summarizes_sample_lesson() {
    let (_dir, path) = temp_fixture("sample.lesson.json");

    vlp()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("skips:     1"))
        .stdout(predicate::str::contains("subtitles: 1"))
        .stdout(predicate::str::contains("overlays:  1"))
        .stdout(predicate::str::contains("pauses:    1"))
        .stdout(predicate::str::contains("16:51"));
}

#[test]
fn info_shows_last_annotation_end() {
    let (_dir, path) = temp_fixture("sample.lesson.json");

    vlp()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("last annotation ends at 00:24"));
}

#[test]
fn info_reports_missing_duration() {
    let (_dir, path) = temp_lesson(r#"{"subtitles": [{"start": 0, "end": 1, "text": "x"}]}"#);

    vlp()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("not be seekable"));
}

#[test]
fn info_warns_about_broken_ranges() {
    let (_dir, path) = temp_fixture("broken_ranges.lesson.json");

    vlp()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: skip #1"))
        .stdout(predicate::str::contains("warning: pause #1"));
}

#[test]
fn info_fails_on_missing_file() {
    vlp()
        .arg("info")
        .arg("/nonexistent/lesson.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load lesson"));
}

#[test]
fn info_fails_on_malformed_json() {
    let (_dir, path) = temp_lesson("{not json");

    vlp()
        .arg("info")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load lesson"));
}
