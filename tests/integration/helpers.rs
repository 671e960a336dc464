//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Path of the checked-in fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a temp dir, returning the dir (for lifetime) and the
/// copied file path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let dest = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("failed to copy fixture");
    (dir, dest)
}

/// Write arbitrary content as a lesson file in a temp dir.
pub fn temp_lesson(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let dest = dir.path().join("lesson.json");
    fs::write(&dest, content).expect("failed to write lesson");
    (dir, dest)
}

/// A command invocation of the vlp binary.
pub fn vlp() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("vlp").expect("vlp binary should build")
}
