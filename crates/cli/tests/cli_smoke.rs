//! CLI smoke tests for pomdeps.
//!
//! These tests verify that the commands run without panicking and return
//! appropriate exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Get a Command for the pomdeps binary.
fn pomdeps_cmd() -> Command {
  cargo_bin_cmd!("pomdeps")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  pomdeps_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  pomdeps_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("pomdeps"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["generate", "render"] {
    pomdeps_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// Argument Handling
// =============================================================================

#[test]
fn no_arguments_fails_with_usage() {
  pomdeps_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_requires_snapshot_argument() {
  pomdeps_cmd().arg("generate").assert().failure();
}

#[test]
fn unknown_subcommand_fails() {
  pomdeps_cmd().arg("frobnicate").assert().failure();
}
