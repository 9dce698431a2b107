use crate::model::{Branch, BranchLayout, Direction, Message, NodeKind};
use serde_json::json;

#[test]
fn branch_deserializes_from_camel_case_records() {
    let b: Branch = serde_json::from_value(json!({
        "id": "b1",
        "parentBranchId": "root",
        "branchPointNodeId": "m7",
        "depth": 1,
        "color": "#ff7f0e",
        "metadata": { "direction": "left" }
    }))
    .unwrap();

    assert_eq!(b.parent_branch_id.as_deref(), Some("root"));
    assert_eq!(b.color.as_deref(), Some("#ff7f0e"));
    assert_eq!(b.direction_preference(), Some(Direction::Left));
    assert!(!b.is_root());
}

#[test]
fn optional_fields_default_to_none() {
    let b: Branch = serde_json::from_value(json!({ "id": "root", "depth": 0 })).unwrap();
    assert!(b.is_root());
    assert!(b.parent_branch_id.is_none());
    assert!(b.direction_preference().is_none());
}

#[test]
fn unknown_direction_preference_is_ignored() {
    let b: Branch = serde_json::from_value(json!({
        "id": "b1", "depth": 1, "metadata": { "direction": "sideways" }
    }))
    .unwrap();
    assert_eq!(b.direction_preference(), None);
}

#[test]
fn message_kind_uses_kebab_case_type_tag() {
    let m: Message = serde_json::from_value(json!({
        "id": "m1", "branchId": "root", "type": "branch-point", "position": 4
    }))
    .unwrap();
    assert_eq!(m.kind, NodeKind::BranchPoint);
    assert!(!m.kind.is_conversational());

    let m: Message = serde_json::from_value(json!({
        "id": "m2", "branchId": "root", "type": "assistant", "position": 5
    }))
    .unwrap();
    assert!(m.kind.is_conversational());
}

#[test]
fn layout_record_round_trips_with_lowercase_direction() {
    let rec = BranchLayout {
        branch_id: "b1".to_string(),
        x: -120.0,
        y: 96.0,
        direction: Direction::Left,
        sibling_index: 1,
        level: 1,
        width: 180.0,
        height: 48.0,
        color: "#2ca02c".to_string(),
    };
    let v = serde_json::to_value(&rec).unwrap();
    assert_eq!(v["direction"], "left");
    assert_eq!(v["branchId"], "b1");
    let back: BranchLayout = serde_json::from_value(v).unwrap();
    assert_eq!(back, rec);
}
