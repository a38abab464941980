//! Deterministic ordering for the output collections.
//!
//! All comparisons are byte comparisons on the raw strings, never
//! locale-sensitive collation, so the same input set renders identically on
//! every platform.

use std::cmp::Ordering;

use crate::coordinate::{ArtifactCoordinate, PluginDescriptor, RepositoryDescriptor};

/// Order dependencies by (group, artifact, version, type, classifier).
///
/// An absent classifier sorts before any present one.
pub fn compare_dependencies(a: &ArtifactCoordinate, b: &ArtifactCoordinate) -> Ordering {
  a.group
    .cmp(&b.group)
    .then_with(|| a.artifact.cmp(&b.artifact))
    .then_with(|| a.version.cmp(&b.version))
    .then_with(|| a.type_.cmp(&b.type_))
    .then_with(|| a.classifier.cmp(&b.classifier))
}

/// Order plugins by (group, artifact, version).
pub fn compare_plugins(a: &PluginDescriptor, b: &PluginDescriptor) -> Ordering {
  a.group
    .cmp(&b.group)
    .then_with(|| a.artifact.cmp(&b.artifact))
    .then_with(|| a.version.cmp(&b.version))
}

/// Order repositories by (identifier, URL), then by the remaining fields.
///
/// Deduplication keeps records that differ in any field; the order is total
/// over those records, so structurally distinct ties cannot occur.
pub fn compare_repositories(a: &RepositoryDescriptor, b: &RepositoryDescriptor) -> Ordering {
  a.id
    .cmp(&b.id)
    .then_with(|| a.url.cmp(&b.url))
    .then_with(|| a.name.cmp(&b.name))
    .then_with(|| a.releases.cmp(&b.releases))
    .then_with(|| a.snapshots.cmp(&b.snapshots))
}

/// Sort a dependency list into its canonical order.
pub fn sort_dependencies(dependencies: &mut [ArtifactCoordinate]) {
  dependencies.sort_by(compare_dependencies);
}

/// Sort a plugin list into its canonical order.
pub fn sort_plugins(plugins: &mut [PluginDescriptor]) {
  plugins.sort_by(compare_plugins);
}

/// Sort a repository list into its canonical order.
pub fn sort_repositories(repositories: &mut [RepositoryDescriptor]) {
  repositories.sort_by(compare_repositories);
}
