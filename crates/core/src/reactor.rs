//! Reactor snapshot input document.
//!
//! The host build tool exports its module tree as a versioned JSON document,
//! which is the only input this library consumes. The snapshot lists every
//! module in reactor order together with the module the build was invoked
//! from; module-tree discovery and per-module descriptor parsing stay on the
//! build-tool side.
//!
//! # Snapshot Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "invoked": "com.acme:acme-platform",
//!   "modules": [
//!     {
//!       "group": "com.acme",
//!       "artifact": "acme-platform",
//!       "version": "2.3.0",
//!       "name": "Acme Platform",
//!       "baseDir": "/work/acme-platform",
//!       "repositories": [
//!         {
//!           "id": "central",
//!           "url": "https://repo.maven.apache.org/maven2",
//!           "releases": true
//!         }
//!       ],
//!       "dependencies": [
//!         { "group": "org.lib", "artifact": "foo", "version": "1.0" }
//!       ],
//!       "plugins": []
//!     }
//!   ]
//! }
//! ```
//!
//! Child modules reference their parent by its `group:artifact` key.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinate::{ArtifactCoordinate, PluginDescriptor, ProjectIdentity, RepositoryDescriptor};

/// Current reactor snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One module of the reactor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
  /// Group identifier.
  pub group: String,

  /// Artifact identifier.
  pub artifact: String,

  /// Declared version.
  pub version: String,

  /// Display name, when the module declares one.
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub name: Option<String>,

  /// Directory the module lives in, when known to the exporter.
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub base_dir: Option<PathBuf>,

  /// `group:artifact` key of the parent module. Absent for a root module.
  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub parent: Option<String>,

  /// Artifact repositories declared by this module, in declaration order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub repositories: Vec<RepositoryDescriptor>,

  /// Plugin repositories declared by this module, in declaration order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub plugin_repositories: Vec<RepositoryDescriptor>,

  /// Direct dependencies declared by this module, in declaration order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub dependencies: Vec<ArtifactCoordinate>,

  /// Build plugins declared by this module, in declaration order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub plugins: Vec<PluginDescriptor>,
}

impl ModuleRecord {
  /// `group:artifact` key used for parent references and the invocation guard.
  pub fn key(&self) -> String {
    format!("{}:{}", self.group, self.artifact)
  }

  /// Identity used to name the generated manifest.
  pub fn identity(&self) -> ProjectIdentity {
    ProjectIdentity {
      group: self.group.clone(),
      artifact: self.artifact.clone(),
      version: self.version.clone(),
      name: self.name.clone(),
    }
  }
}

/// A reactor snapshot: every module of the build plus the invocation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactorSnapshot {
  /// Snapshot format version.
  pub version: u32,

  /// `group:artifact` key of the module the build was invoked from.
  pub invoked: String,

  /// Modules in reactor build order.
  pub modules: Vec<ModuleRecord>,
}

/// Errors that can occur when working with reactor snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
  /// Failed to read the snapshot file.
  #[error("failed to read reactor snapshot: {0}")]
  Read(#[source] io::Error),

  /// Failed to parse the snapshot JSON.
  #[error("failed to parse reactor snapshot: {0}")]
  Parse(#[source] serde_json::Error),

  /// Snapshot format version is not supported.
  #[error("unsupported reactor snapshot version {0}, expected {SNAPSHOT_VERSION}")]
  UnsupportedVersion(u32),

  /// The invoked-module key does not match any module in the snapshot.
  #[error("invoked module {0} not present in snapshot")]
  UnknownInvoked(String),
}

impl ReactorSnapshot {
  /// Load a reactor snapshot from the given path.
  ///
  /// Unlike an optional state file, a run cannot proceed without its
  /// snapshot, so a missing file is an error here.
  pub fn load(path: &Path) -> Result<Self, SnapshotError> {
    let content = fs::read_to_string(path).map_err(SnapshotError::Read)?;
    let snapshot: ReactorSnapshot = serde_json::from_str(&content).map_err(SnapshotError::Parse)?;

    if snapshot.version != SNAPSHOT_VERSION {
      return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }

    Ok(snapshot)
  }

  /// Find a module by its `group:artifact` key.
  pub fn find_module(&self, key: &str) -> Option<&ModuleRecord> {
    self.modules.iter().find(|module| module.key() == key)
  }

  /// The module the build was invoked from.
  pub fn invoked_module(&self) -> Result<&ModuleRecord, SnapshotError> {
    self
      .find_module(&self.invoked)
      .ok_or_else(|| SnapshotError::UnknownInvoked(self.invoked.clone()))
  }

  /// Walk parent links upward from `start` to the top-level module.
  ///
  /// The walk follows the parent key while the parent exists in the snapshot
  /// and has a base directory; a parent outside the reactor (unknown key or
  /// no directory) terminates it. A visited set guards against parent cycles
  /// in a malformed snapshot.
  pub fn find_top_level<'a>(&'a self, start: &'a ModuleRecord) -> &'a ModuleRecord {
    let mut current = start;
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(current.key());

    while let Some(parent) = current.parent.as_ref().and_then(|key| self.find_module(key)) {
      if parent.base_dir.is_none() || !seen.insert(parent.key()) {
        break;
      }
      current = parent;
    }

    current
  }

  /// The top-level module of the reactor, resolved from the invoked module.
  pub fn top_level(&self) -> Result<&ModuleRecord, SnapshotError> {
    Ok(self.find_top_level(self.invoked_module()?))
  }

  /// True when the build was invoked from the top-level module.
  pub fn is_top_level_invocation(&self) -> Result<bool, SnapshotError> {
    let invoked = self.invoked_module()?;
    Ok(invoked.key() == self.find_top_level(invoked).key())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn make_module(group: &str, artifact: &str) -> ModuleRecord {
    ModuleRecord {
      group: group.to_string(),
      artifact: artifact.to_string(),
      version: "1.0".to_string(),
      name: None,
      base_dir: Some(PathBuf::from(format!("/work/{artifact}"))),
      parent: None,
      repositories: vec![],
      plugin_repositories: vec![],
      dependencies: vec![],
      plugins: vec![],
    }
  }

  fn make_snapshot(invoked: &str, modules: Vec<ModuleRecord>) -> ReactorSnapshot {
    ReactorSnapshot {
      version: SNAPSHOT_VERSION,
      invoked: invoked.to_string(),
      modules,
    }
  }

  mod loading {
    use super::*;

    #[test]
    fn load_roundtrip() {
      let temp_dir = TempDir::new().unwrap();
      let path = temp_dir.path().join("reactor.json");

      let snapshot = make_snapshot("com.acme:root", vec![make_module("com.acme", "root")]);
      fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

      let loaded = ReactorSnapshot::load(&path).unwrap();
      assert_eq!(snapshot, loaded);
    }

    #[test]
    fn load_missing_file_returns_read_error() {
      let temp_dir = TempDir::new().unwrap();
      let result = ReactorSnapshot::load(&temp_dir.path().join("missing.json"));
      assert!(matches!(result, Err(SnapshotError::Read(_))));
    }

    #[test]
    fn load_invalid_json_returns_parse_error() {
      let temp_dir = TempDir::new().unwrap();
      let path = temp_dir.path().join("reactor.json");
      fs::write(&path, "not valid json {{{").unwrap();

      let result = ReactorSnapshot::load(&path);
      assert!(matches!(result, Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn load_wrong_schema_returns_parse_error() {
      let temp_dir = TempDir::new().unwrap();
      let path = temp_dir.path().join("reactor.json");
      fs::write(&path, r#"{"foo": "bar"}"#).unwrap();

      let result = ReactorSnapshot::load(&path);
      assert!(matches!(result, Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn load_empty_file_returns_parse_error() {
      let temp_dir = TempDir::new().unwrap();
      let path = temp_dir.path().join("reactor.json");
      fs::write(&path, "").unwrap();

      let result = ReactorSnapshot::load(&path);
      assert!(matches!(result, Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn load_unsupported_version_returns_error() {
      let temp_dir = TempDir::new().unwrap();
      let path = temp_dir.path().join("reactor.json");
      fs::write(&path, r#"{"version": 999, "invoked": "g:a", "modules": []}"#).unwrap();

      let result = ReactorSnapshot::load(&path);
      assert!(matches!(result, Err(SnapshotError::UnsupportedVersion(999))));
    }

    #[test]
    fn camel_case_fields_parse() {
      let temp_dir = TempDir::new().unwrap();
      let path = temp_dir.path().join("reactor.json");
      fs::write(
        &path,
        r#"{
          "version": 1,
          "invoked": "com.acme:root",
          "modules": [
            {
              "group": "com.acme",
              "artifact": "root",
              "version": "1.0",
              "baseDir": "/work/root",
              "pluginRepositories": [
                { "id": "central", "url": "https://repo.example/maven2" }
              ]
            }
          ]
        }"#,
      )
      .unwrap();

      let snapshot = ReactorSnapshot::load(&path).unwrap();
      assert_eq!(snapshot.modules[0].base_dir.as_deref(), Some(Path::new("/work/root")));
      assert_eq!(snapshot.modules[0].plugin_repositories.len(), 1);
    }
  }

  mod top_level {
    use super::*;

    #[test]
    fn single_module_is_its_own_top_level() {
      let snapshot = make_snapshot("com.acme:root", vec![make_module("com.acme", "root")]);
      assert!(snapshot.is_top_level_invocation().unwrap());
    }

    #[test]
    fn child_walks_up_to_root() {
      let root = make_module("com.acme", "root");
      let mut child = make_module("com.acme", "child");
      child.parent = Some("com.acme:root".to_string());
      let mut grandchild = make_module("com.acme", "grandchild");
      grandchild.parent = Some("com.acme:child".to_string());

      let snapshot = make_snapshot("com.acme:grandchild", vec![root, child, grandchild]);

      let top = snapshot.top_level().unwrap();
      assert_eq!(top.artifact, "root");
      assert!(!snapshot.is_top_level_invocation().unwrap());
    }

    #[test]
    fn parent_without_base_dir_stops_walk() {
      // An external parent pom (installed from a repository) has no directory;
      // the module below it is the effective top level.
      let mut external = make_module("org.corp", "corporate-parent");
      external.base_dir = None;
      let mut root = make_module("com.acme", "root");
      root.parent = Some("org.corp:corporate-parent".to_string());

      let snapshot = make_snapshot("com.acme:root", vec![external, root]);

      assert_eq!(snapshot.top_level().unwrap().artifact, "root");
      assert!(snapshot.is_top_level_invocation().unwrap());
    }

    #[test]
    fn parent_key_unknown_to_snapshot_stops_walk() {
      let mut root = make_module("com.acme", "root");
      root.parent = Some("org.elsewhere:not-here".to_string());

      let snapshot = make_snapshot("com.acme:root", vec![root]);

      assert_eq!(snapshot.top_level().unwrap().artifact, "root");
    }

    #[test]
    fn parent_cycle_terminates() {
      let mut a = make_module("com.acme", "a");
      a.parent = Some("com.acme:b".to_string());
      let mut b = make_module("com.acme", "b");
      b.parent = Some("com.acme:a".to_string());

      let snapshot = make_snapshot("com.acme:a", vec![a, b]);

      // Walk must terminate; which module it lands on is unspecified.
      let _ = snapshot.top_level().unwrap();
    }

    #[test]
    fn unknown_invoked_module_is_an_error() {
      let snapshot = make_snapshot("com.acme:ghost", vec![make_module("com.acme", "root")]);
      let result = snapshot.invoked_module();
      assert!(matches!(result, Err(SnapshotError::UnknownInvoked(key)) if key == "com.acme:ghost"));
    }
  }
}
