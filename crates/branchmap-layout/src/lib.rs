#![forbid(unsafe_code)]

//! Deterministic layout + color assignment for conversation branch trees.
//!
//! Input is a full snapshot of one project's branches and messages; output is one
//! [`BranchLayout`](branchmap_core::BranchLayout) record per branch. The engine is
//! synchronous and side-effect-free until the persistence step, and carries no global
//! state: palette and spacing live in a caller-owned [`LayoutConfig`].

pub mod color;
pub mod config;
pub mod engine;
pub mod position;
pub mod store;

pub use color::ColorPalette;
pub use config::{LayoutConfig, SlotConflictMode, StrategyKind};
pub use engine::{BranchPosition, ComputedLayout, LayoutEngine, LayoutResult, UpdateReport};
pub use store::{InMemoryStore, LayoutStore, StoreError};

/// Recovered anomaly, surfaced as a diagnostic alongside the layout result.
///
/// Warnings never abort a recompute: the engine degrades (fallback coordinates, fallback
/// color, empty result) and reports what happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutWarning {
    #[error("no root branch found; layout result is empty")]
    MissingRoot,

    #[error("duplicate branch id {id}; layout result is empty")]
    DuplicateBranch { id: String },

    #[error("branch point of {branch_id} not found in parent branch; using depth fallback")]
    BranchPointNotFound { branch_id: String },

    #[error("branch {branch_id} is not reachable from the root; using origin fallback")]
    UnreachableBranch { branch_id: String },

    #[error("color palette exhausted for {branch_id}; using fallback color")]
    PaletteExhausted { branch_id: String },
}
