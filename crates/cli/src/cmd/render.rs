//! Implementation of the `pomdeps render` command.
//!
//! This command aggregates like `generate` but prints the POM to stdout
//! instead of writing it, regardless of which module was invoked.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pomdeps_core::config::{AggregateConfig, CONFIG_FILENAME};
use pomdeps_core::pipeline::aggregate;
use pomdeps_core::reactor::ReactorSnapshot;
use pomdeps_core::render::render_pom;

pub fn cmd_render(snapshot_path: &Path, config_path: Option<&Path>, artifacts: &[String]) -> Result<()> {
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

  let top = snapshot
    .top_level()
    .context("Failed to resolve the top-level module")?;
  let project = top.identity();

  let set = aggregate(&snapshot.modules, &project, &config).context("Failed to aggregate build coordinates")?;
  let pom = render_pom(&project, &set).context("Failed to render dependencies POM")?;

  print!("{pom}");

  Ok(())
}
