//! Error types for the aggregation pipeline.

use std::io;

use thiserror::Error;

use crate::reactor::SnapshotError;

/// Errors that can occur while aggregating coordinates and writing the manifest.
#[derive(Debug, Error)]
pub enum AggregateError {
  /// An artifact coordinate string could not be parsed.
  ///
  /// Carries the offending input verbatim so the user can find the bad entry.
  #[error("unable to parse artifact coordinates: {0}")]
  Parse(String),

  /// The manifest document could not be assembled.
  #[error("failed to render manifest: {0}")]
  Render(#[from] std::fmt::Error),

  /// The manifest could not be written to disk.
  #[error("failed to write manifest: {0}")]
  Io(#[from] io::Error),

  /// The top-level module has no base directory to place the manifest in.
  #[error("top-level module {0} has no base directory")]
  MissingBaseDir(String),

  /// The reactor snapshot was unusable.
  #[error(transparent)]
  Snapshot(#[from] SnapshotError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, AggregateError>;
