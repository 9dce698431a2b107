use crate::color::ColorPalette;

/// Horizontal layout backend. Both satisfy the same no-overlap and determinism
/// contract; see `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Two-pass recursive tree walk (primary).
    #[default]
    TreeWalk,
    /// Integer-lane allocator relative to a center column.
    Slots(SlotConflictMode),
}

/// What the slot allocator does when a requested lane is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotConflictMode {
    /// Push every lane at or beyond the contested one a step further outward, then take it.
    #[default]
    InsertShift,
    /// Scan outward for the nearest free lane on the preferred side; fall back to the
    /// opposite side when `max_slots_per_side` bounds the preferred one.
    NearestFree,
}

/// Caller-owned layout configuration. No process-wide state: two engines with different
/// configs can recompute different projects in parallel.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Minimum horizontal gap between subtree extents (and between lanes).
    pub horizontal_spacing: f64,
    /// Vertical distance per message ordinal.
    pub vertical_spacing: f64,
    /// Fixed node width reported in every layout record.
    pub node_width: f64,
    /// Fixed node height reported in every layout record.
    pub node_height: f64,
    /// Absolute x of the root branch (typically the viewport center).
    pub origin_x: f64,
    /// Absolute y of the root branch.
    pub origin_y: f64,
    pub strategy: StrategyKind,
    /// Lane bound per side for [`SlotConflictMode::NearestFree`]. `None` = unbounded.
    pub max_slots_per_side: Option<u32>,
    pub palette: ColorPalette,
    /// Assigned when the color candidate pool is empty. Never a layout failure.
    pub fallback_color: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 40.0,
            vertical_spacing: 96.0,
            node_width: 180.0,
            node_height: 48.0,
            origin_x: 0.0,
            origin_y: 0.0,
            strategy: StrategyKind::default(),
            max_slots_per_side: None,
            palette: ColorPalette::default(),
            fallback_color: "#94a3b8".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Center-to-center distance of two adjacent lanes.
    pub fn lane_step(&self) -> f64 {
        self.node_width + self.horizontal_spacing
    }
}
