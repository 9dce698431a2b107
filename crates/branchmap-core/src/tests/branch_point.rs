use super::{branch, message};
use crate::model::NodeKind;
use crate::{MessageIndex, branch_point_ordinal};

#[test]
fn ordinal_counts_only_conversational_messages() {
    let messages = vec![
        message("m0", "root", NodeKind::Root, 0),
        message("m1", "root", NodeKind::User, 10),
        message("m2", "root", NodeKind::Assistant, 20),
        message("m3", "root", NodeKind::BranchPoint, 25),
        message("m4", "root", NodeKind::User, 30),
    ];
    let index = MessageIndex::build(&messages);
    assert_eq!(index.conversational_len("root"), 3);

    let child = branch("a", Some("root"), Some("m4"), 1);
    assert_eq!(branch_point_ordinal(&child, &index), Some(2));
}

#[test]
fn ordinal_orders_by_position_not_insertion() {
    // Positions with gaps, inserted out of order.
    let messages = vec![
        message("late", "root", NodeKind::User, 500),
        message("early", "root", NodeKind::User, 3),
        message("mid", "root", NodeKind::Assistant, 40),
    ];
    let index = MessageIndex::build(&messages);

    let child = branch("a", Some("root"), Some("mid"), 1);
    assert_eq!(branch_point_ordinal(&child, &index), Some(1));
}

#[test]
fn root_has_no_ordinal() {
    let index = MessageIndex::build(&[]);
    let root = branch("root", None, None, 0);
    assert_eq!(branch_point_ordinal(&root, &index), None);
}

#[test]
fn missing_message_is_not_found() {
    let messages = vec![message("m1", "root", NodeKind::User, 1)];
    let index = MessageIndex::build(&messages);
    let child = branch("a", Some("root"), Some("nope"), 1);
    assert_eq!(branch_point_ordinal(&child, &index), None);
}

#[test]
fn structural_fork_target_is_not_found() {
    let messages = vec![
        message("m1", "root", NodeKind::User, 1),
        message("bp", "root", NodeKind::BranchPoint, 2),
    ];
    let index = MessageIndex::build(&messages);
    let child = branch("a", Some("root"), Some("bp"), 1);
    assert_eq!(branch_point_ordinal(&child, &index), None);
}

#[test]
fn cross_branch_fork_target_is_not_found() {
    // The fork message exists but belongs to a branch other than the recorded parent.
    let messages = vec![message("m1", "other", NodeKind::User, 1)];
    let index = MessageIndex::build(&messages);
    let child = branch("a", Some("root"), Some("m1"), 1);
    assert_eq!(branch_point_ordinal(&child, &index), None);
}
