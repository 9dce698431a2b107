#![forbid(unsafe_code)]

//! `branchmap` renders a branching conversation history as transit-map coordinates.
//!
//! The engine is headless and deterministic: it consumes a snapshot of branch and
//! message records, and produces one `{x, y, direction, siblingIndex, level, width,
//! height, color}` record per branch for an external renderer. Persistence goes through
//! the caller's [`layout::LayoutStore`] collaborator.
//!
//! Async entry points are executor-free delegations to the sync engine; no specific
//! runtime is required.

pub use branchmap_core::*;

pub mod layout {
    pub use branchmap_layout::{
        ColorPalette, ComputedLayout, InMemoryStore, LayoutConfig, LayoutEngine, LayoutResult,
        LayoutStore, LayoutWarning, SlotConflictMode, StoreError, StrategyKind, UpdateReport,
    };
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Model(#[from] branchmap_core::Error),
    #[error(transparent)]
    Store(#[from] branchmap_layout::StoreError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Synchronous full-project recompute (loads the snapshot, lays out, persists).
pub fn update_positions_sync(
    engine: &layout::LayoutEngine,
    store: &dyn layout::LayoutStore,
    project_id: &str,
) -> Result<layout::UpdateReport> {
    Ok(engine.update_positions(store, project_id)?)
}

pub async fn update_positions(
    engine: &layout::LayoutEngine,
    store: &dyn layout::LayoutStore,
    project_id: &str,
) -> Result<layout::UpdateReport> {
    update_positions_sync(engine, store, project_id)
}

/// Checks that a snapshot forms a well-rooted branch tree before handing it to the
/// engine. The engine itself degrades gracefully on bad snapshots; this is for callers
/// that want a hard error instead.
pub fn validate_snapshot(branches: &[Branch]) -> Result<()> {
    build_hierarchy(branches)?;
    Ok(())
}

/// One-shot layout over in-memory records, without persistence.
pub fn layout_snapshot(
    engine: &layout::LayoutEngine,
    branches: &[Branch],
    messages: &[Message],
) -> layout::LayoutResult {
    engine.layout_records(branches, messages)
}
