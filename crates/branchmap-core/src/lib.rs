#![forbid(unsafe_code)]

//! Branch/message model for conversation transit maps (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (identical snapshot in, identical records out)
//! - no I/O: the engine consumes in-memory records and emits numeric records
//! - lenient ingestion: inconsistent snapshots degrade, they do not panic

pub mod branch_point;
pub mod error;
pub mod hierarchy;
pub mod model;

pub use branch_point::{MessageIndex, branch_point_ordinal};
pub use error::{Error, Result};
pub use hierarchy::{BranchHierarchy, build_hierarchy};
pub use model::{Branch, BranchLayout, Direction, Message, NodeKind};

#[cfg(test)]
mod tests;
