// src/dag/mod.rs

//! Dependency graph construction and traversal.
//!
//! - [`graph`] builds the per-call title-keyed graph.
//! - [`cycle`] rejects graphs that contain a cycle.
//! - [`topo`] produces a dependency-first order.
//! - [`levels`] computes each task's dependency depth.

pub mod cycle;
pub mod graph;
pub mod levels;
pub mod topo;

pub use cycle::{cycle_members, has_cycle};
pub use graph::DependencyGraph;
pub use levels::{LevelMap, assign_levels};
pub use topo::topological_order;
