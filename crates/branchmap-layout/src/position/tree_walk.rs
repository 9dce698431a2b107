//! Two-pass recursive tree layout (primary backend).
//!
//! Bottom-up pass: each subtree is laid out in its own relative coordinate space and
//! reports its horizontal extent. Children split into a right-biased and a left-biased
//! group and pack outward from the parent, nearest first, with `horizontal_spacing`
//! between subtree extents. Top-down pass: offsets accumulate from the root, which is
//! pinned at `origin_x`.
//!
//! Sibling subtree extents are disjoint intervals, so no two branches of the same
//! generation can come closer than one node width plus spacing anywhere in the tree.

use super::{BranchTable, HorizontalStrategy, Placement, preferred_direction};
use crate::config::LayoutConfig;
use branchmap_core::{BranchHierarchy, Direction};
use rustc_hash::FxHashMap;

pub struct TreeWalkStrategy;

/// Per-recursion accumulator: sides chosen while grouping children. Threaded explicitly
/// so each subtree stays testable in isolation.
#[derive(Default)]
struct WalkContext {
    directions: FxHashMap<String, Direction>,
}

/// A laid-out subtree in coordinates relative to its own anchor.
struct Subtree {
    /// Offset of every branch in the subtree relative to the subtree root.
    offsets: Vec<(String, f64)>,
    /// Leftmost extent (negative or `-node_width / 2`).
    min: f64,
    /// Rightmost extent.
    max: f64,
}

impl HorizontalStrategy for TreeWalkStrategy {
    fn place(
        &self,
        tree: &BranchHierarchy,
        branches: &BranchTable<'_>,
        config: &LayoutConfig,
    ) -> FxHashMap<String, Placement> {
        let mut ctx = WalkContext::default();
        let sub = layout_subtree(tree.root(), tree, branches, config, &mut ctx);

        let mut out = FxHashMap::with_capacity_and_hasher(sub.offsets.len(), Default::default());
        for (id, offset) in sub.offsets {
            let direction = if id == tree.root() {
                Direction::None
            } else {
                ctx.directions.get(&id).copied().unwrap_or(Direction::None)
            };
            out.insert(
                id,
                Placement {
                    x: config.origin_x + offset,
                    direction,
                },
            );
        }
        out
    }
}

fn layout_subtree(
    id: &str,
    tree: &BranchHierarchy,
    branches: &BranchTable<'_>,
    config: &LayoutConfig,
    ctx: &mut WalkContext,
) -> Subtree {
    let half_w = config.node_width / 2.0;
    let mut offsets = vec![(id.to_string(), 0.0)];
    let mut min = -half_w;
    let mut max = half_w;

    let mut right_group: Vec<&str> = Vec::new();
    let mut left_group: Vec<&str> = Vec::new();
    for (i, child) in tree.children(id).iter().enumerate() {
        let pref = preferred_direction(branches.get(child.as_str()).copied(), i);
        match pref {
            Direction::Left => left_group.push(child),
            _ => right_group.push(child),
        }
    }

    // Right group: pack outward from the parent's right edge, nearest first.
    let mut cursor = half_w;
    for child in right_group {
        let sub = layout_subtree(child, tree, branches, config, ctx);
        let child_offset = cursor + config.horizontal_spacing - sub.min;
        for (cid, off) in sub.offsets {
            offsets.push((cid, off + child_offset));
        }
        cursor = child_offset + sub.max;
        max = max.max(cursor);
        ctx.directions.insert(child.to_string(), Direction::Right);
    }

    // Left group mirrors from the parent's left edge.
    let mut cursor = -half_w;
    for child in left_group {
        let sub = layout_subtree(child, tree, branches, config, ctx);
        let child_offset = cursor - config.horizontal_spacing - sub.max;
        for (cid, off) in sub.offsets {
            offsets.push((cid, off + child_offset));
        }
        cursor = child_offset + sub.min;
        min = min.min(cursor);
        ctx.directions.insert(child.to_string(), Direction::Left);
    }

    Subtree { offsets, min, max }
}
