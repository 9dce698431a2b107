//! Branch-point ordinal lookup.
//!
//! A child branch's vertical anchor is the ordinal of its fork message among the parent
//! branch's conversational messages. Structural nodes (root, branch-root, branch-point
//! markers) never carry ordinals.

use crate::model::{Branch, Message};
use rustc_hash::FxHashMap;

/// Conversational messages grouped per branch and sorted ascending by `position`.
#[derive(Debug, Clone, Default)]
pub struct MessageIndex {
    by_branch: FxHashMap<String, Vec<(i64, String)>>,
}

impl MessageIndex {
    pub fn build(messages: &[Message]) -> Self {
        let mut by_branch: FxHashMap<String, Vec<(i64, String)>> = FxHashMap::default();
        for m in messages {
            if !m.kind.is_conversational() {
                continue;
            }
            by_branch
                .entry(m.branch_id.clone())
                .or_default()
                .push((m.position, m.id.clone()));
        }
        for seq in by_branch.values_mut() {
            // Ties are forbidden by the data model; the id tiebreak keeps the index
            // deterministic even for malformed snapshots.
            seq.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        }
        Self { by_branch }
    }

    /// Number of conversational messages in `branch_id`.
    pub fn conversational_len(&self, branch_id: &str) -> usize {
        self.by_branch.get(branch_id).map_or(0, Vec::len)
    }

    fn ordinal_of(&self, branch_id: &str, message_id: &str) -> Option<usize> {
        self.by_branch
            .get(branch_id)?
            .iter()
            .position(|(_, id)| id == message_id)
    }
}

/// 0-based ordinal of `branch.branch_point_node_id` within the parent branch's
/// conversational sequence.
///
/// Returns `None` for the root and for any referential inconsistency (missing message,
/// structural target, message stored under a branch other than the parent). The caller
/// falls back to a depth-based vertical anchor in that case.
pub fn branch_point_ordinal(branch: &Branch, index: &MessageIndex) -> Option<usize> {
    let parent = branch.parent_branch_id.as_deref()?;
    let node = branch.branch_point_node_id.as_deref()?;
    index.ordinal_of(parent, node)
}
