//! Aggregate manifest rendering.
//!
//! The output is a synthetic Maven POM describing a project that depends on
//! every aggregated coordinate. Resolving that one project pre-fetches the
//! whole tree's artifacts, which is the entire point: the file feeds a
//! container build step that warms the artifact cache in its own layer.
//!
//! Dependencies are emitted as minimal (groupId, artifactId, version)
//! records; type and classifier are not re-emitted because prefetch only
//! needs the coordinates that drive resolution.

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use crate::coordinate::{ArtifactCoordinate, ProjectIdentity, RepositoryDescriptor};
use crate::error::Result;
use crate::pipeline::DependencySet;

/// File name of the generated manifest.
pub const MANIFEST_FILENAME: &str = "pom-dependencies.xml";

/// Render the aggregate POM document.
///
/// The synthetic project reuses the top-level group and version; its artifact
/// identifier and display name carry a `dependencies` suffix so the output
/// can never shadow the real project. Packaging is `pom`: there is nothing to
/// build, only coordinates to resolve.
pub fn render_pom(project: &ProjectIdentity, set: &DependencySet) -> Result<String> {
  let mut out = String::new();

  writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
  writeln!(
    out,
    r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">"#
  )?;
  leaf(&mut out, 1, "modelVersion", "4.0.0")?;
  writeln!(out)?;

  leaf(&mut out, 1, "groupId", &project.group)?;
  leaf(&mut out, 1, "artifactId", &format!("{}-dependencies", project.artifact))?;
  leaf(&mut out, 1, "version", &project.version)?;
  leaf(&mut out, 1, "packaging", "pom")?;
  leaf(&mut out, 1, "name", &format!("{} Dependencies", project.display_name()))?;

  if !set.repositories.is_empty() {
    writeln!(out)?;
    open(&mut out, 1, "repositories")?;
    for repo in &set.repositories {
      write_repository(&mut out, 2, "repository", repo)?;
    }
    close(&mut out, 1, "repositories")?;
  }

  if !set.plugin_repositories.is_empty() {
    writeln!(out)?;
    open(&mut out, 1, "pluginRepositories")?;
    for repo in &set.plugin_repositories {
      write_repository(&mut out, 2, "pluginRepository", repo)?;
    }
    close(&mut out, 1, "pluginRepositories")?;
  }

  if !set.dependencies.is_empty() {
    writeln!(out)?;
    open(&mut out, 1, "dependencies")?;
    for dep in &set.dependencies {
      write_dependency(&mut out, 2, dep)?;
    }
    close(&mut out, 1, "dependencies")?;
  }

  if !set.plugins.is_empty() {
    writeln!(out)?;
    open(&mut out, 1, "build")?;
    open(&mut out, 2, "plugins")?;
    for plugin in &set.plugins {
      open(&mut out, 3, "plugin")?;
      leaf(&mut out, 4, "groupId", &plugin.group)?;
      leaf(&mut out, 4, "artifactId", &plugin.artifact)?;
      leaf(&mut out, 4, "version", &plugin.version)?;
      if !plugin.dependencies.is_empty() {
        open(&mut out, 4, "dependencies")?;
        for dep in &plugin.dependencies {
          write_dependency(&mut out, 5, dep)?;
        }
        close(&mut out, 4, "dependencies")?;
      }
      close(&mut out, 3, "plugin")?;
    }
    close(&mut out, 2, "plugins")?;
    close(&mut out, 1, "build")?;
  }

  writeln!(out, "</project>")?;

  Ok(out)
}

/// Write manifest text to `pom-dependencies.xml` under `base_dir`.
///
/// Content goes to a temp file in the same directory which is renamed over
/// the target, so a failed run never leaves a partial manifest behind and the
/// previous manifest, if any, survives.
pub fn write_manifest(base_dir: &Path, content: &str) -> Result<PathBuf> {
  let path = base_dir.join(MANIFEST_FILENAME);
  let temp_path = base_dir.join(format!("{MANIFEST_FILENAME}.tmp"));

  fs::write(&temp_path, content)?;
  fs::rename(&temp_path, &path)?;

  Ok(path)
}

fn write_repository(out: &mut String, depth: usize, tag: &str, repo: &RepositoryDescriptor) -> fmt::Result {
  open(out, depth, tag)?;
  leaf(out, depth + 1, "id", &repo.id)?;
  if let Some(name) = &repo.name {
    leaf(out, depth + 1, "name", name)?;
  }
  leaf(out, depth + 1, "url", &repo.url)?;
  if let Some(enabled) = repo.releases {
    open(out, depth + 1, "releases")?;
    leaf(out, depth + 2, "enabled", if enabled { "true" } else { "false" })?;
    close(out, depth + 1, "releases")?;
  }
  if let Some(enabled) = repo.snapshots {
    open(out, depth + 1, "snapshots")?;
    leaf(out, depth + 2, "enabled", if enabled { "true" } else { "false" })?;
    close(out, depth + 1, "snapshots")?;
  }
  close(out, depth, tag)
}

fn write_dependency(out: &mut String, depth: usize, dep: &ArtifactCoordinate) -> fmt::Result {
  open(out, depth, "dependency")?;
  leaf(out, depth + 1, "groupId", &dep.group)?;
  leaf(out, depth + 1, "artifactId", &dep.artifact)?;
  leaf(out, depth + 1, "version", &dep.version)?;
  close(out, depth, "dependency")
}

fn open(out: &mut String, depth: usize, tag: &str) -> fmt::Result {
  writeln!(out, "{}<{}>", indent(depth), tag)
}

fn close(out: &mut String, depth: usize, tag: &str) -> fmt::Result {
  writeln!(out, "{}</{}>", indent(depth), tag)
}

fn leaf(out: &mut String, depth: usize, tag: &str, value: &str) -> fmt::Result {
  writeln!(out, "{}<{}>{}</{}>", indent(depth), tag, escape(value), tag)
}

fn indent(depth: usize) -> String {
  "  ".repeat(depth)
}

/// Escape the five XML-reserved characters in element text.
fn escape(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&apos;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
