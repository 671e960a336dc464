//! Integration tests for the CLI surface itself.

use predicates::prelude::*;

use super::helpers::vlp;

#[test]
fn help_lists_subcommands() {
    vlp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Play a lesson file"))
        .stdout(predicate::str::contains("Summarize a lesson file"))
        .stdout(predicate::str::contains("Manage configuration"))
        .stdout(predicate::str::contains("Generate shell completions"));
}

#[test]
fn version_carries_crate_version() {
    vlp()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_generate_for_bash() {
    vlp()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("vlp"));
}

#[test]
fn unknown_subcommand_fails_with_usage_error() {
    vlp().arg("frobnicate").assert().failure().code(2);
}
