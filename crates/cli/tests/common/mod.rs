//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Get a Command for the pomdeps binary.
pub fn pomdeps_cmd() -> Command {
  cargo_bin_cmd!("pomdeps")
}

/// Path to a file under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Copy a snapshot fixture into the temp directory, pointing the top-level
/// module's base directory at the directory itself.
pub fn write_snapshot(temp: &TempDir, fixture_name: &str) -> PathBuf {
  let template = fs::read_to_string(fixture(fixture_name)).unwrap();
  let base_dir = temp.path().display().to_string().replace('\\', "\\\\");
  let snapshot_path = temp.path().join("reactor.json");
  fs::write(&snapshot_path, template.replace("__BASE_DIR__", &base_dir)).unwrap();
  snapshot_path
}
