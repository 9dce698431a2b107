mod branch_point;
mod hierarchy;
mod model;

use crate::model::{Branch, Message, NodeKind};

pub(crate) fn branch(id: &str, parent: Option<&str>, fork: Option<&str>, depth: u32) -> Branch {
    Branch {
        id: id.to_string(),
        parent_branch_id: parent.map(str::to_string),
        branch_point_node_id: fork.map(str::to_string),
        depth,
        color: None,
        metadata: None,
    }
}

pub(crate) fn message(id: &str, branch_id: &str, kind: NodeKind, position: i64) -> Message {
    Message {
        id: id.to_string(),
        branch_id: branch_id.to_string(),
        kind,
        position,
    }
}
