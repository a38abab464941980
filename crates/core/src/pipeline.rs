//! The aggregation pipeline.
//!
//! One invocation flattens every module's coordinates, filters them,
//! deduplicates by identity key, sorts each collection into canonical order,
//! and writes the rendered manifest next to the top-level module. All state
//! lives on the stack of a single call; two runs over the same snapshot
//! produce byte-identical output.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::collect::{
  collect_dependencies, collect_plugin_repositories, collect_plugins, collect_repositories, parse_additional,
};
use crate::config::AggregateConfig;
use crate::coordinate::{ArtifactCoordinate, PluginDescriptor, ProjectIdentity, RepositoryDescriptor};
use crate::dedup::retain_first_by;
use crate::error::{AggregateError, Result};
use crate::filter::{RepositoryFilter, retain_external};
use crate::reactor::{ModuleRecord, ReactorSnapshot};
use crate::render::{render_pom, write_manifest};
use crate::sort::{sort_dependencies, sort_plugins, sort_repositories};

/// The four aggregated collections, filtered, deduplicated, and sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencySet {
  /// Artifact repositories.
  pub repositories: Vec<RepositoryDescriptor>,

  /// Plugin repositories.
  pub plugin_repositories: Vec<RepositoryDescriptor>,

  /// Dependencies, including plugin-declared and additional artifacts.
  pub dependencies: Vec<ArtifactCoordinate>,

  /// Build plugins.
  pub plugins: Vec<PluginDescriptor>,
}

/// Outcome of a completed [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
  /// Where the manifest was written.
  pub manifest_path: PathBuf,

  /// The collections that were rendered into it.
  pub set: DependencySet,
}

/// Aggregate the reactor's modules into a [`DependencySet`].
///
/// # Arguments
///
/// * `modules` - Every module of the reactor, in build order
/// * `project` - Identity of the top-level project; its group drives the
///   self-reference exclusion
/// * `config` - Repository include/exclude lists and additional artifacts
///
/// # Pipeline
///
/// Both repository collections are filtered through the configured lists,
/// deduplicated by structural equality, and sorted by (id, URL) with the
/// remaining fields breaking ties. Plugins are
/// deduplicated by (group, artifact, version) and sorted; the dependency
/// stream then pulls each surviving plugin's dependency list, so a duplicate
/// plugin's divergent list never contributes. Dependencies are the module
/// declarations, then plugin declarations, then additional artifacts, with
/// in-tree coordinates dropped, first-wins deduplication applied, and the
/// result sorted by (group, artifact, version, type, classifier).
pub fn aggregate(modules: &[ModuleRecord], project: &ProjectIdentity, config: &AggregateConfig) -> Result<DependencySet> {
  let filter = RepositoryFilter::from_config(config);

  let mut repositories = retain_first_by(filter.apply(collect_repositories(modules)), RepositoryDescriptor::clone);
  sort_repositories(&mut repositories);

  let mut plugin_repositories = retain_first_by(
    filter.apply(collect_plugin_repositories(modules)),
    RepositoryDescriptor::clone,
  );
  sort_repositories(&mut plugin_repositories);

  let mut plugins = retain_first_by(collect_plugins(modules), PluginDescriptor::identity_key);
  sort_plugins(&mut plugins);

  let additional = parse_additional(&config.additional_artifacts)?;
  let raw = collect_dependencies(modules, &plugins, &additional);
  let external = retain_external(raw, &project.group);
  let mut dependencies = retain_first_by(external, ArtifactCoordinate::identity_key);
  sort_dependencies(&mut dependencies);

  Ok(DependencySet {
    repositories,
    plugin_repositories,
    dependencies,
    plugins,
  })
}

/// Run the guarded pipeline against a loaded snapshot.
///
/// Returns `Ok(None)` without touching the filesystem when the build was
/// invoked from a module other than the top level; in a multi-module build
/// only the top-level invocation generates the manifest. On success the
/// manifest sits at `pom-dependencies.xml` under the top-level module's
/// directory.
pub fn run(snapshot: &ReactorSnapshot, config: &AggregateConfig) -> Result<Option<RunSummary>> {
  let invoked = snapshot.invoked_module()?;
  let top = snapshot.find_top_level(invoked);
  debug!(invoked = %invoked.key(), top_level = %top.key(), "resolved top-level module");
  if invoked.key() != top.key() {
    info!(invoked = %invoked.key(), "not a top-level module, skipping");
    return Ok(None);
  }

  let project = top.identity();
  let set = aggregate(&snapshot.modules, &project, config)?;

  let base_dir = top
    .base_dir
    .as_deref()
    .ok_or_else(|| AggregateError::MissingBaseDir(top.key()))?;
  let content = render_pom(&project, &set)?;
  let manifest_path = write_manifest(base_dir, &content)?;

  info!(
    manifest = %manifest_path.display(),
    repositories = set.repositories.len(),
    plugin_repositories = set.plugin_repositories.len(),
    dependencies = set.dependencies.len(),
    plugins = set.plugins.len(),
    "dependencies POM written"
  );

  Ok(Some(RunSummary { manifest_path, set }))
}
