//! Horizontal positioning backends.
//!
//! Both strategies honor the same contract: no two branches at the same depth and side
//! come closer than one node-width-plus-spacing unit, and identical input trees produce
//! identical coordinates. Tie-break when both sides are free (documented, deterministic):
//! even sibling index goes right, odd goes left, and within a side children pack in
//! creation order nearest the parent first.

pub mod slots;
pub mod tree_walk;

use crate::config::{LayoutConfig, StrategyKind};
use branchmap_core::{Branch, BranchHierarchy, Direction};
use rustc_hash::FxHashMap;

pub use slots::SlotStrategy;
pub use tree_walk::TreeWalkStrategy;

/// Branch records keyed by id. Built once per recompute.
pub type BranchTable<'a> = FxHashMap<&'a str, &'a Branch>;

pub fn branch_table(branches: &[Branch]) -> BranchTable<'_> {
    let mut table = BranchTable::with_capacity_and_hasher(branches.len(), Default::default());
    for b in branches {
        table.insert(b.id.as_str(), b);
    }
    table
}

/// Horizontal coordinate + side for one branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub direction: Direction,
}

pub trait HorizontalStrategy {
    /// Places every branch reachable from the root. Callers handle unreachable ids.
    fn place(
        &self,
        tree: &BranchHierarchy,
        branches: &BranchTable<'_>,
        config: &LayoutConfig,
    ) -> FxHashMap<String, Placement>;
}

pub fn strategy_for(kind: StrategyKind) -> Box<dyn HorizontalStrategy> {
    match kind {
        StrategyKind::TreeWalk => Box::new(TreeWalkStrategy),
        StrategyKind::Slots(mode) => Box::new(SlotStrategy { mode }),
    }
}

/// Side preference for the `sibling_index`-th child: an explicit stored preference wins,
/// otherwise siblings alternate (even right, odd left).
pub(crate) fn preferred_direction(branch: Option<&Branch>, sibling_index: usize) -> Direction {
    if let Some(pref) = branch.and_then(Branch::direction_preference) {
        return pref;
    }
    if sibling_index % 2 == 0 {
        Direction::Right
    } else {
        Direction::Left
    }
}
