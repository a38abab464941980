//! pomdeps-core: Coordinate aggregation for multi-module builds
//!
//! This crate provides the fundamental types of the aggregator:
//! - `ArtifactCoordinate`, `PluginDescriptor`, `RepositoryDescriptor`: the
//!   coordinate model shared by every stage
//! - `ReactorSnapshot`: the serialized module tree an invocation works from
//! - `DependencySet`: the filtered, deduplicated, sorted collections
//! - `render_pom`: the synthetic aggregate POM written next to the
//!   top-level module

pub mod collect;
pub mod config;
pub mod coordinate;
pub mod dedup;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod reactor;
pub mod render;
pub mod sort;
