//! Aggregation options.
//!
//! Options are read from a TOML file (`pomdeps.toml` by default). Every key
//! is optional; an absent file means "no filtering, no extra artifacts".
//!
//! # Options Format
//!
//! ```toml
//! include-only-repo-ids = ["central"]
//! include-only-repo-urls = []
//! excluded-repo-ids = ["legacy"]
//! excluded-repo-urls = ["http://repo.deprecated.example/maven2"]
//! additional-artifacts = ["org.extra:baz:4.0:pom"]
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default options file name.
pub const CONFIG_FILENAME: &str = "pomdeps.toml";

/// User-supplied aggregation options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AggregateConfig {
  /// When non-empty, only repositories with one of these identifiers are kept.
  #[serde(default)]
  pub include_only_repo_ids: Vec<String>,

  /// When non-empty, only repositories with one of these URLs are kept.
  #[serde(default)]
  pub include_only_repo_urls: Vec<String>,

  /// Repositories with one of these identifiers are always dropped.
  #[serde(default)]
  pub excluded_repo_ids: Vec<String>,

  /// Repositories with one of these URLs are always dropped.
  #[serde(default)]
  pub excluded_repo_urls: Vec<String>,

  /// Extra coordinate strings (`group:artifact:version[:type[:classifier]]`)
  /// appended to the dependency stream.
  #[serde(default)]
  pub additional_artifacts: Vec<String>,
}

/// Errors that can occur when loading the options file.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Failed to read the options file.
  #[error("failed to read config file: {0}")]
  Read(#[source] io::Error),

  /// Failed to parse the options file TOML.
  #[error("failed to parse config file: {0}")]
  Parse(#[source] toml::de::Error),
}

impl AggregateConfig {
  /// Load options from a TOML file.
  ///
  /// A missing file is an error; use [`load_or_default`](Self::load_or_default)
  /// when the path was not named explicitly.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
  }

  /// Load options from a TOML file, or defaults if the file does not exist.
  pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
    match fs::read_to_string(path) {
      Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
      Err(e) => Err(ConfigError::Read(e)),
    }
  }
}
