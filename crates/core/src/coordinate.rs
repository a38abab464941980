//! Coordinate value types for artifacts, build plugins, and repositories.
//!
//! A coordinate string has the form `group:artifact:version[:type[:classifier]]`,
//! e.g. `org.lib:foo:1.0` or `org.lib:foo:1.0:jar:sources`. The type segment
//! defaults to `jar` when absent.
//!
//! Each type declares its own identity key, used for deduplication and
//! ordering:
//!
//! - artifacts: (group, artifact, version, type, classifier); scope is
//!   deliberately not part of identity
//! - plugins: (group, artifact, version); the plugin's dependency list is
//!   not part of identity
//! - repositories: structural equality over all fields, so an identifier
//!   reused with a different URL is never silently collapsed

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AggregateError;

/// Artifact type assumed when a coordinate does not name one.
pub const DEFAULT_ARTIFACT_TYPE: &str = "jar";

/// Scope assigned to artifacts supplied through configuration.
pub const ADDITIONAL_ARTIFACT_SCOPE: &str = "compile";

/// A single artifact coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactCoordinate {
  /// Group identifier (e.g. `org.apache.maven`).
  pub group: String,

  /// Artifact identifier within the group.
  pub artifact: String,

  /// Declared version.
  pub version: String,

  /// Artifact type; `jar` when the declaration does not name one.
  #[serde(rename = "type", default = "default_artifact_type")]
  pub type_: String,

  /// Optional classifier (e.g. `sources`).
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub classifier: Option<String>,

  /// Declared scope. Not part of the coordinate's identity.
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub scope: Option<String>,
}

fn default_artifact_type() -> String {
  DEFAULT_ARTIFACT_TYPE.to_string()
}

impl ArtifactCoordinate {
  /// Identity key for deduplication and ordering.
  ///
  /// Two coordinates with equal keys refer to the same fetchable artifact
  /// even when their scopes differ.
  pub fn identity_key(&self) -> (String, String, String, String, Option<String>) {
    (
      self.group.clone(),
      self.artifact.clone(),
      self.version.clone(),
      self.type_.clone(),
      self.classifier.clone(),
    )
  }
}

impl fmt::Display for ArtifactCoordinate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}:{}:{}", self.group, self.artifact, self.version, self.type_)?;
    if let Some(classifier) = &self.classifier {
      write!(f, ":{}", classifier)?;
    }
    Ok(())
  }
}

impl FromStr for ArtifactCoordinate {
  type Err = AggregateError;

  /// Parse a coordinate string of the form `group:artifact:version[:type[:classifier]]`.
  ///
  /// Fails when the string has fewer than 3 or more than 5 colon-delimited
  /// segments, or when any segment is empty. Parsed coordinates carry the
  /// `compile` scope, since this is the path configuration-supplied artifacts
  /// come in through.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let segments: Vec<&str> = s.split(':').collect();
    if segments.len() < 3 || segments.len() > 5 || segments.iter().any(|part| part.is_empty()) {
      return Err(AggregateError::Parse(s.to_string()));
    }

    Ok(Self {
      group: segments[0].to_string(),
      artifact: segments[1].to_string(),
      version: segments[2].to_string(),
      type_: segments.get(3).map_or_else(default_artifact_type, |t| t.to_string()),
      classifier: segments.get(4).map(|c| c.to_string()),
      scope: Some(ADDITIONAL_ARTIFACT_SCOPE.to_string()),
    })
  }
}

/// A build plugin declaration with its own dependency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
  /// Group identifier.
  pub group: String,

  /// Artifact identifier.
  pub artifact: String,

  /// Declared version.
  pub version: String,

  /// Dependencies declared by the plugin itself.
  ///
  /// Plugins can introduce artifacts that are not visible as module
  /// dependencies, so these are pulled into the dependency stream.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub dependencies: Vec<ArtifactCoordinate>,
}

impl PluginDescriptor {
  /// Identity key for deduplication and ordering.
  ///
  /// The dependency list is not part of identity: the first-seen plugin's
  /// list wins when the same plugin is declared by several modules.
  pub fn identity_key(&self) -> (String, String, String) {
    (self.group.clone(), self.artifact.clone(), self.version.clone())
  }
}

impl fmt::Display for PluginDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
  }
}

/// An artifact repository declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
  /// Repository identifier.
  pub id: String,

  /// Human-readable name.
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub name: Option<String>,

  /// Base URL artifacts are fetched from.
  pub url: String,

  /// Whether release artifacts are served. `None` when the declaration is silent.
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub releases: Option<bool>,

  /// Whether snapshot artifacts are served. `None` when the declaration is silent.
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub snapshots: Option<bool>,
}

/// Identity of the top-level project the manifest is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
  /// Group identifier. Dependencies sharing it are treated as in-tree
  /// modules and excluded from the output.
  pub group: String,

  /// Artifact identifier.
  pub artifact: String,

  /// Version.
  pub version: String,

  /// Display name, when the project declares one.
  pub name: Option<String>,
}

impl ProjectIdentity {
  /// Display name, falling back to the artifact identifier.
  pub fn display_name(&self) -> &str {
    self.name.as_deref().unwrap_or(&self.artifact)
  }
}
