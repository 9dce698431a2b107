//! Palette-based branch colors.
//!
//! Colors are sticky (a stored color is never recomputed), deterministic (a stable hash
//! of the branch id picks among the candidates, never randomness), and distinct from the
//! parent and from already-colored siblings where the pool allows.

use crate::LayoutWarning;
use crate::position::BranchTable;
use branchmap_core::BranchHierarchy;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Display palette. Index 0 is reserved for the root branch; every other branch draws
/// from the remaining entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(
            [
                "#6366f1", // root
                "#f97316", "#22c55e", "#ef4444", "#0ea5e9", "#eab308", "#ec4899", "#14b8a6",
                "#a855f7", "#84cc16", "#f43f5e", "#06b6d4",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        )
    }
}

impl ColorPalette {
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The root-reserved entry.
    pub fn root_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Every entry except the root-reserved one.
    pub fn branch_colors(&self) -> &[String] {
        self.colors.get(1..).unwrap_or(&[])
    }
}

/// Stable, seed-free hash of a branch id. Two processes over the same snapshot must
/// agree on every pick, which rules out `RandomState` hashing.
fn stable_pick(id: &str, len: usize) -> usize {
    debug_assert!(len > 0);
    let mut h = FxHasher::default();
    id.hash(&mut h);
    (h.finish() % len as u64) as usize
}

/// Assigns a color to every branch in the hierarchy, parents before children.
///
/// Branches outside the hierarchy walk (unreachable from the root) keep their stored
/// color if any; positioning already reports them.
pub(crate) fn assign(
    tree: &BranchHierarchy,
    branches: &BranchTable<'_>,
    palette: &ColorPalette,
    fallback_color: &str,
    warnings: &mut Vec<LayoutWarning>,
) -> FxHashMap<String, String> {
    let mut assigned: FxHashMap<String, String> = FxHashMap::default();

    for id in tree.walk_preorder() {
        let branch = branches.get(id.as_str()).copied();

        // Sticky: a stored color wins unconditionally.
        if let Some(stored) = branch.and_then(|b| b.color.clone()) {
            assigned.insert(id, stored);
            continue;
        }

        if id == tree.root() {
            let color = palette
                .root_color()
                .unwrap_or(fallback_color)
                .to_string();
            assigned.insert(id, color);
            continue;
        }

        let parent = branch.and_then(|b| b.parent_branch_id.as_deref());
        let color = pick_color(&id, parent, tree, branches, &assigned, palette).unwrap_or_else(
            || {
                tracing::warn!(branch = %id, "color palette exhausted");
                warnings.push(LayoutWarning::PaletteExhausted {
                    branch_id: id.clone(),
                });
                fallback_color.to_string()
            },
        );
        assigned.insert(id, color);
    }

    assigned
}

fn pick_color(
    id: &str,
    parent: Option<&str>,
    tree: &BranchHierarchy,
    branches: &BranchTable<'_>,
    assigned: &FxHashMap<String, String>,
    palette: &ColorPalette,
) -> Option<String> {
    let base = palette.branch_colors();
    if base.is_empty() {
        return None;
    }

    // Drop the parent's color unless that would empty the pool.
    let parent_color = parent.and_then(|p| assigned.get(p)).map(String::as_str);
    let without_parent: Vec<&String> = base
        .iter()
        .filter(|c| Some(c.as_str()) != parent_color)
        .collect();
    let candidates = if without_parent.is_empty() {
        base.iter().collect()
    } else {
        without_parent
    };

    // Prefer colors no already-colored sibling uses. "Already colored" covers both
    // earlier picks in this walk and sticky colors on branches not yet visited.
    let mut sibling_colors: Vec<&str> = Vec::new();
    if let Some(parent) = parent {
        for sib in tree.children(parent) {
            if sib == id {
                continue;
            }
            if let Some(c) = assigned.get(sib) {
                sibling_colors.push(c);
            } else if let Some(c) = branches.get(sib.as_str()).and_then(|b| b.color.as_deref()) {
                sibling_colors.push(c);
            }
        }
    }
    let without_siblings: Vec<&String> = candidates
        .iter()
        .filter(|c| !sibling_colors.contains(&c.as_str()))
        .copied()
        .collect();
    let candidates = if without_siblings.is_empty() {
        candidates
    } else {
        without_siblings
    };

    let pick = stable_pick(id, candidates.len());
    Some(candidates[pick].clone())
}
