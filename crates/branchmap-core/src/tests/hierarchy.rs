use super::branch;
use crate::{Error, build_hierarchy};

#[test]
fn indexes_every_branch_including_leaves() {
    let branches = vec![
        branch("root", None, None, 0),
        branch("a", Some("root"), Some("m1"), 1),
        branch("b", Some("root"), Some("m2"), 1),
        branch("a1", Some("a"), Some("m3"), 2),
    ];
    let tree = build_hierarchy(&branches).unwrap();

    assert_eq!(tree.root(), "root");
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.children("root"), ["a", "b"]);
    assert_eq!(tree.children("a"), ["a1"]);
    assert!(tree.children("b").is_empty());
    assert!(tree.children("a1").is_empty());
}

#[test]
fn children_keep_creation_order() {
    let branches = vec![
        branch("root", None, None, 0),
        branch("z", Some("root"), Some("m1"), 1),
        branch("a", Some("root"), Some("m2"), 1),
        branch("m", Some("root"), Some("m3"), 1),
    ];
    let tree = build_hierarchy(&branches).unwrap();
    assert_eq!(tree.children("root"), ["z", "a", "m"]);
    assert_eq!(tree.sibling_index(Some("root"), "a"), 1);
    assert_eq!(tree.sibling_index(None, "root"), 0);
}

#[test]
fn missing_root_is_an_error() {
    let branches = vec![branch("a", Some("root"), Some("m1"), 1)];
    assert!(matches!(build_hierarchy(&branches), Err(Error::MissingRoot)));
}

#[test]
fn duplicate_branch_id_is_an_error() {
    let branches = vec![branch("root", None, None, 0), branch("root", None, None, 0)];
    assert!(matches!(
        build_hierarchy(&branches),
        Err(Error::DuplicateBranch { .. })
    ));
}

#[test]
fn dangling_parent_leaves_an_orphan_leaf() {
    let branches = vec![
        branch("root", None, None, 0),
        branch("lost", Some("gone"), Some("m1"), 1),
    ];
    let tree = build_hierarchy(&branches).unwrap();
    assert!(tree.contains("lost"));
    assert!(tree.children("root").is_empty());
}

#[test]
fn preorder_walk_is_root_first_with_sibling_order() {
    let branches = vec![
        branch("root", None, None, 0),
        branch("a", Some("root"), Some("m1"), 1),
        branch("b", Some("root"), Some("m2"), 1),
        branch("a1", Some("a"), Some("m3"), 2),
        branch("a2", Some("a"), Some("m4"), 2),
    ];
    let tree = build_hierarchy(&branches).unwrap();
    assert_eq!(tree.walk_preorder(), ["root", "a", "a1", "a2", "b"]);
}
