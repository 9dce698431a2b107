//! Slot-allocator layout (alternative backend).
//!
//! Every branch owns one integer lane relative to a center column; the root is pinned to
//! lane 0 and `x = origin_x + lane * lane_step`. A child requests the lane adjacent to
//! its parent on its preferred side; conflicts resolve per [`SlotConflictMode`], and lane
//! uniqueness is the no-overlap guarantee.
//!
//! Directions are derived from the final lanes (child lane vs. parent lane), so an
//! insertion shift that moves a parent keeps every reported side geometrically true.

use super::{BranchTable, HorizontalStrategy, Placement, preferred_direction};
use crate::config::{LayoutConfig, SlotConflictMode};
use branchmap_core::{BranchHierarchy, Direction};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

pub struct SlotStrategy {
    pub mode: SlotConflictMode,
}

impl HorizontalStrategy for SlotStrategy {
    fn place(
        &self,
        tree: &BranchHierarchy,
        branches: &BranchTable<'_>,
        config: &LayoutConfig,
    ) -> FxHashMap<String, Placement> {
        let mut lanes = LaneMap::default();
        lanes.claim(0, tree.root());

        for id in tree.walk_preorder() {
            if id == tree.root() {
                continue;
            }
            let branch = branches.get(id.as_str()).copied();
            let Some(parent) = branch.and_then(|b| b.parent_branch_id.as_deref()) else {
                continue;
            };
            let Some(parent_lane) = lanes.lane_of(parent) else {
                continue;
            };

            let sibling_index = tree.sibling_index(Some(parent), &id);
            let step: i64 = match preferred_direction(branch, sibling_index) {
                Direction::Left => -1,
                _ => 1,
            };
            let requested = parent_lane + step;

            let lane = match self.mode {
                SlotConflictMode::InsertShift => lanes.insert_shift(requested, step),
                SlotConflictMode::NearestFree => {
                    lanes.nearest_free(requested, step, parent_lane, config.max_slots_per_side)
                }
            };
            lanes.claim(lane, &id);
        }

        let mut out = FxHashMap::with_capacity_and_hasher(lanes.by_id.len(), Default::default());
        for (id, lane) in &lanes.by_id {
            let direction = if id.as_str() == tree.root() {
                Direction::None
            } else {
                let parent_lane = branches
                    .get(id.as_str())
                    .and_then(|b| b.parent_branch_id.as_deref())
                    .and_then(|p| lanes.lane_of(p))
                    .unwrap_or(0);
                if *lane > parent_lane {
                    Direction::Right
                } else {
                    Direction::Left
                }
            };
            out.insert(
                id.clone(),
                Placement {
                    x: config.origin_x + *lane as f64 * config.lane_step(),
                    direction,
                },
            );
        }
        out
    }
}

#[derive(Default)]
struct LaneMap {
    by_id: FxHashMap<String, i64>,
    occupied: BTreeMap<i64, String>,
}

impl LaneMap {
    fn claim(&mut self, lane: i64, id: &str) {
        debug_assert!(!self.occupied.contains_key(&lane));
        self.occupied.insert(lane, id.to_string());
        self.by_id.insert(id.to_string(), lane);
    }

    fn lane_of(&self, id: &str) -> Option<i64> {
        self.by_id.get(id).copied()
    }

    /// Frees `requested` by pushing everything at or beyond it (same side of the center
    /// column) one lane further outward. Lane 0 stays the root's: a request for the
    /// center column moves one more step in the travel direction first.
    fn insert_shift(&mut self, requested: i64, step: i64) -> i64 {
        let mut requested = requested;
        if requested == 0 {
            requested += step;
        }
        if !self.occupied.contains_key(&requested) {
            return requested;
        }

        let outward = requested.signum();
        let mut to_move: Vec<(i64, String)> = self
            .occupied
            .iter()
            .filter(|(lane, _)| lane.signum() == outward && lane.abs() >= requested.abs())
            .map(|(lane, id)| (*lane, id.clone()))
            .collect();
        // Move outermost first so no shift lands on a still-occupied lane.
        to_move.sort_by_key(|(lane, _)| std::cmp::Reverse(lane.abs()));
        for (lane, id) in to_move {
            self.occupied.remove(&lane);
            self.occupied.insert(lane + outward, id.clone());
            self.by_id.insert(id, lane + outward);
        }
        requested
    }

    /// Nearest free lane scanning in the travel direction, skipping the center column.
    /// A bounded side that fills up falls back to the opposite direction; if that side is
    /// bounded and full too, the scan continues past the preferred bound so allocation
    /// always terminates with a unique lane.
    fn nearest_free(
        &self,
        requested: i64,
        step: i64,
        parent_lane: i64,
        max_per_side: Option<u32>,
    ) -> i64 {
        let bound = max_per_side.map(|n| n as i64);

        let mut lane = requested;
        loop {
            if bound.is_some_and(|b| lane.abs() > b) {
                break;
            }
            if lane != 0 && !self.occupied.contains_key(&lane) {
                return lane;
            }
            lane += step;
        }

        // Preferred side exhausted: scan the opposite side outward from the parent.
        let mut lane = parent_lane - step;
        loop {
            if bound.is_some_and(|b| lane.abs() > b) {
                break;
            }
            if lane != 0 && !self.occupied.contains_key(&lane) {
                return lane;
            }
            lane -= step;
        }

        // Both sides bounded and full: overshoot the preferred bound rather than fail.
        let mut lane = requested;
        while lane == 0 || self.occupied.contains_key(&lane) {
            lane += step;
        }
        lane
    }
}
