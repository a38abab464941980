//! Flattening of module records into coordinate streams.
//!
//! Every function here is pure over its inputs and keeps module declaration
//! order; filtering, deduplication, and sorting happen downstream.

use crate::coordinate::{ArtifactCoordinate, PluginDescriptor, RepositoryDescriptor};
use crate::error::Result;
use crate::reactor::ModuleRecord;

/// All artifact repositories from all modules, in module order.
pub fn collect_repositories(modules: &[ModuleRecord]) -> Vec<RepositoryDescriptor> {
  modules.iter().flat_map(|module| module.repositories.iter().cloned()).collect()
}

/// All plugin repositories from all modules, in module order.
pub fn collect_plugin_repositories(modules: &[ModuleRecord]) -> Vec<RepositoryDescriptor> {
  modules
    .iter()
    .flat_map(|module| module.plugin_repositories.iter().cloned())
    .collect()
}

/// All build plugins from all modules, in module order, each carrying its own
/// dependency list.
pub fn collect_plugins(modules: &[ModuleRecord]) -> Vec<PluginDescriptor> {
  modules.iter().flat_map(|module| module.plugins.iter().cloned()).collect()
}

/// Parse additional artifact coordinate strings.
///
/// A malformed string aborts the whole run; no partial stream is returned.
pub fn parse_additional(artifacts: &[String]) -> Result<Vec<ArtifactCoordinate>> {
  artifacts.iter().map(|s| s.parse()).collect()
}

/// The raw dependency stream.
///
/// Module dependencies come first in module order, then the dependencies
/// declared by each plugin in `plugins` order, then the additional artifacts.
/// This order decides which variant survives first-wins deduplication.
pub fn collect_dependencies(
  modules: &[ModuleRecord],
  plugins: &[PluginDescriptor],
  additional: &[ArtifactCoordinate],
) -> Vec<ArtifactCoordinate> {
  let module_deps = modules.iter().flat_map(|module| module.dependencies.iter().cloned());
  let plugin_deps = plugins.iter().flat_map(|plugin| plugin.dependencies.iter().cloned());

  module_deps.chain(plugin_deps).chain(additional.iter().cloned()).collect()
}
