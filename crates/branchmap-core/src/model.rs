use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One conversation fork. Records come from the storage collaborator as-is; only the
/// computed layout fields are ever written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    /// `None` only for the root branch.
    #[serde(default)]
    pub parent_branch_id: Option<String>,
    /// Message in the parent branch at which this branch began. `None` only for the root.
    #[serde(default)]
    pub branch_point_node_id: Option<String>,
    /// Tree distance from the root branch (root = 0).
    pub depth: u32,
    /// Sticky display color from a prior layout run. Never recomputed when present.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl Branch {
    pub fn is_root(&self) -> bool {
        self.depth == 0 && self.parent_branch_id.is_none()
    }

    /// Explicit direction preference stored by the UI (`metadata.direction`).
    pub fn direction_preference(&self) -> Option<Direction> {
        let raw = metadata_str(self.metadata.as_ref()?, &["direction"])?;
        match raw {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

fn metadata_str<'a>(meta: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut cur = meta;
    for k in path {
        cur = cur.get(*k)?;
    }
    cur.as_str()
}

/// Timeline node inside exactly one branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub branch_id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Strict total order within the branch (gaps allowed, ties forbidden).
    pub position: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Root,
    BranchRoot,
    BranchPoint,
    User,
    Assistant,
}

impl NodeKind {
    /// Only conversational nodes count toward ordinal position lookups.
    pub fn is_conversational(self) -> bool {
        matches!(self, NodeKind::User | NodeKind::Assistant)
    }
}

/// Which side of its parent a branch is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    #[default]
    None,
}

/// Computed layout record, one per branch. This is the full engine output: the storage
/// collaborator persists it into the branch's layout slot and the renderer consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchLayout {
    pub branch_id: String,
    pub x: f64,
    pub y: f64,
    pub direction: Direction,
    pub sibling_index: i64,
    pub level: i64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}
