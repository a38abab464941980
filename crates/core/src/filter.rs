//! Include/exclude filtering policies.
//!
//! Repositories pass through four independent lists; dependencies pass
//! through a single self-reference predicate that drops coordinates pointing
//! back into the project's own module tree.

use crate::config::AggregateConfig;
use crate::coordinate::{ArtifactCoordinate, RepositoryDescriptor};

/// Repository filter combining include and exclude lists.
///
/// An entry survives only when every axis passes: each include list is either
/// empty (allow all) or contains the entry's value, and neither exclude list
/// contains it. Exclusion applies regardless of what the include lists say.
#[derive(Debug, Clone, Default)]
pub struct RepositoryFilter {
  include_only_ids: Vec<String>,
  include_only_urls: Vec<String>,
  excluded_ids: Vec<String>,
  excluded_urls: Vec<String>,
}

impl RepositoryFilter {
  /// Build the filter from user-supplied options.
  pub fn from_config(config: &AggregateConfig) -> Self {
    Self {
      include_only_ids: config.include_only_repo_ids.clone(),
      include_only_urls: config.include_only_repo_urls.clone(),
      excluded_ids: config.excluded_repo_ids.clone(),
      excluded_urls: config.excluded_repo_urls.clone(),
    }
  }

  /// True when the repository passes all four lists.
  pub fn accepts(&self, repo: &RepositoryDescriptor) -> bool {
    (self.include_only_ids.is_empty() || self.include_only_ids.iter().any(|id| *id == repo.id))
      && (self.include_only_urls.is_empty() || self.include_only_urls.iter().any(|url| *url == repo.url))
      && !self.excluded_ids.iter().any(|id| *id == repo.id)
      && !self.excluded_urls.iter().any(|url| *url == repo.url)
  }

  /// Drop every repository the filter rejects, preserving order.
  pub fn apply(&self, repositories: Vec<RepositoryDescriptor>) -> Vec<RepositoryDescriptor> {
    repositories.into_iter().filter(|repo| self.accepts(repo)).collect()
  }
}

/// Drop dependencies whose group matches the project's own group.
///
/// Those coordinates are sibling modules of the same tree, not external
/// artifacts, and must never appear in the prefetch manifest.
pub fn retain_external(dependencies: Vec<ArtifactCoordinate>, project_group: &str) -> Vec<ArtifactCoordinate> {
  dependencies.into_iter().filter(|dep| dep.group != project_group).collect()
}
