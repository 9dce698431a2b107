//! Layout orchestrator.
//!
//! Composes hierarchy building, branch-point lookup, horizontal placement and color
//! assignment over one project's snapshot, and persists one record per branch through
//! the storage collaborator. Recomputation is idempotent: an unchanged snapshot yields
//! bit-identical records.

use crate::config::LayoutConfig;
use crate::position::{branch_table, strategy_for};
use crate::store::{LayoutStore, StoreError};
use crate::{LayoutWarning, color};
use branchmap_core::{
    Branch, BranchLayout, Direction, Error as CoreError, Message, MessageIndex,
    branch_point_ordinal, build_hierarchy,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Positional output for one branch, before color assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPosition {
    pub branch_id: String,
    pub x: f64,
    pub y: f64,
    pub direction: Direction,
    pub sibling_index: i64,
    pub level: i64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ComputedLayout {
    /// One entry per input branch, in input (creation) order.
    pub positions: Vec<BranchPosition>,
    pub warnings: Vec<LayoutWarning>,
}

/// Full per-branch records (positions + colors) plus accumulated diagnostics.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub records: Vec<BranchLayout>,
    pub warnings: Vec<LayoutWarning>,
}

/// Outcome of one `update_positions` run. Write failures are isolated per branch: the
/// listed branches keep their stale stored layout, everything in `written` is fresh.
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub written: usize,
    pub failed: Vec<(String, StoreError)>,
    pub warnings: Vec<LayoutWarning>,
}

impl UpdateReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes position, direction, sibling index and level for every branch.
    ///
    /// A snapshot without a usable root yields an empty result with a warning; an empty
    /// snapshot yields an empty result silently (a valid, degenerate project).
    pub fn compute_layout(&self, branches: &[Branch], messages: &[Message]) -> ComputedLayout {
        if branches.is_empty() {
            return ComputedLayout::default();
        }

        let mut warnings = Vec::new();
        let tree = match build_hierarchy(branches) {
            Ok(tree) => tree,
            Err(CoreError::MissingRoot) => {
                tracing::warn!("layout skipped: no root branch");
                warnings.push(LayoutWarning::MissingRoot);
                return ComputedLayout {
                    positions: Vec::new(),
                    warnings,
                };
            }
            Err(CoreError::DuplicateBranch { id }) => {
                tracing::warn!(branch = %id, "layout skipped: duplicate branch id");
                warnings.push(LayoutWarning::DuplicateBranch { id });
                return ComputedLayout {
                    positions: Vec::new(),
                    warnings,
                };
            }
        };

        let table = branch_table(branches);
        let index = MessageIndex::build(messages);
        let placements = strategy_for(self.config.strategy).place(&tree, &table, &self.config);

        let mut positions = Vec::with_capacity(branches.len());
        for b in branches {
            let placement = placements.get(&b.id);
            let (x, direction) = match placement {
                Some(p) => (p.x, p.direction),
                None => {
                    tracing::warn!(branch = %b.id, "branch unreachable from root");
                    warnings.push(LayoutWarning::UnreachableBranch {
                        branch_id: b.id.clone(),
                    });
                    (self.config.origin_x, Direction::None)
                }
            };

            let y = if b.id == tree.root() {
                self.config.origin_y
            } else {
                match branch_point_ordinal(b, &index) {
                    Some(ordinal) => ordinal as f64 * self.config.vertical_spacing,
                    None => {
                        if placement.is_some() {
                            tracing::debug!(branch = %b.id, "branch point not found, depth fallback");
                            warnings.push(LayoutWarning::BranchPointNotFound {
                                branch_id: b.id.clone(),
                            });
                        }
                        f64::from(b.depth) * self.config.vertical_spacing
                    }
                }
            };

            positions.push(BranchPosition {
                branch_id: b.id.clone(),
                x,
                y,
                direction,
                sibling_index: tree.sibling_index(b.parent_branch_id.as_deref(), &b.id) as i64,
                level: i64::from(b.depth),
                width: self.config.node_width,
                height: self.config.node_height,
            });
        }

        ComputedLayout {
            positions,
            warnings,
        }
    }

    /// Deterministic per-branch colors (sticky colors preserved). See `color`.
    pub fn assign_colors(&self, branches: &[Branch]) -> FxHashMap<String, String> {
        let mut warnings = Vec::new();
        self.colors_with_warnings(branches, &mut warnings)
    }

    fn colors_with_warnings(
        &self,
        branches: &[Branch],
        warnings: &mut Vec<LayoutWarning>,
    ) -> FxHashMap<String, String> {
        let Ok(tree) = build_hierarchy(branches) else {
            // Degenerate snapshot: nothing to allocate against, keep stored colors.
            return branches
                .iter()
                .filter_map(|b| b.color.clone().map(|c| (b.id.clone(), c)))
                .collect();
        };
        let table = branch_table(branches);
        color::assign(
            &tree,
            &table,
            &self.config.palette,
            &self.config.fallback_color,
            warnings,
        )
    }

    /// Positions + colors merged into the final record set.
    pub fn layout_records(&self, branches: &[Branch], messages: &[Message]) -> LayoutResult {
        let mut computed = self.compute_layout(branches, messages);
        let colors = self.colors_with_warnings(branches, &mut computed.warnings);

        let records = computed
            .positions
            .into_iter()
            .map(|p| {
                let color = colors
                    .get(&p.branch_id)
                    .cloned()
                    .unwrap_or_else(|| self.config.fallback_color.clone());
                BranchLayout {
                    branch_id: p.branch_id,
                    x: p.x,
                    y: p.y,
                    direction: p.direction,
                    sibling_index: p.sibling_index,
                    level: p.level,
                    width: p.width,
                    height: p.height,
                    color,
                }
            })
            .collect();

        LayoutResult {
            records,
            warnings: computed.warnings,
        }
    }

    /// Loads one project snapshot, recomputes, and writes one record per branch.
    ///
    /// The read completes before any write. Writes are isolated: a failure for one
    /// branch never blocks the others, and failures are aggregated into the report.
    /// Only a snapshot *read* failure is an `Err`.
    pub fn update_positions(
        &self,
        store: &dyn LayoutStore,
        project_id: &str,
    ) -> Result<UpdateReport, StoreError> {
        let branches = store.load_branches(project_id)?;
        let messages = store.load_messages(project_id)?;

        let result = self.layout_records(&branches, &messages);
        let mut report = UpdateReport {
            written: 0,
            failed: Vec::new(),
            warnings: result.warnings,
        };

        for record in &result.records {
            match store.write_branch_layout(project_id, &record.branch_id, record) {
                Ok(()) => report.written += 1,
                Err(err) => {
                    tracing::warn!(branch = %record.branch_id, error = %err, "layout write failed");
                    report.failed.push((record.branch_id.clone(), err));
                }
            }
        }

        Ok(report)
    }

    /// Executor-free async wrapper around [`LayoutEngine::update_positions`].
    pub async fn update_positions_async(
        &self,
        store: &dyn LayoutStore,
        project_id: &str,
    ) -> Result<UpdateReport, StoreError> {
        self.update_positions(store, project_id)
    }
}
