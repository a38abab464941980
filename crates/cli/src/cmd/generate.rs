//! Implementation of the `pomdeps generate` command.
//!
//! This command loads a reactor snapshot, aggregates its build coordinates,
//! and writes the dependencies POM next to the top-level module.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pomdeps_core::config::{AggregateConfig, CONFIG_FILENAME};
use pomdeps_core::pipeline;
use pomdeps_core::reactor::ReactorSnapshot;

pub fn cmd_generate(snapshot_path: &Path, config_path: Option<&Path>, artifacts: &[String]) -> Result<()> {
  let snapshot = ReactorSnapshot::load(snapshot_path)
    .with_context(|| format!("Failed to load reactor snapshot: {}", snapshot_path.display()))?;

  let mut config = match config_path {
    Some(path) => {
      debug!("loading configuration from {}", path.display());
      AggregateConfig::load(path).with_context(|| format!("Failed to load configuration: {}", path.display()))?
    }
    None => AggregateConfig::load_or_default(Path::new(CONFIG_FILENAME))
      .with_context(|| format!("Failed to load configuration: {}", CONFIG_FILENAME))?,
  };
  config.additional_artifacts.extend(artifacts.iter().cloned());

  let summary = pipeline::run(&snapshot, &config).context("Failed to aggregate build coordinates")?;

  match summary {
    Some(summary) => {
      println!("Dependencies POM: {}", summary.manifest_path.display());
      println!("Repositories: {}", summary.set.repositories.len());
      println!("Plugin repositories: {}", summary.set.plugin_repositories.len());
      println!("Dependencies: {}", summary.set.dependencies.len());
      println!("Plugins: {}", summary.set.plugins.len());
    }
    None => println!("Not a top-level module, skipping"),
  }

  Ok(())
}
