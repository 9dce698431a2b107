use branchmap::layout::{InMemoryStore, LayoutEngine, LayoutStore};
use branchmap::{Branch, Message, NodeKind};
use futures::executor::block_on;

fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store.insert_project(
        "p1",
        vec![
            Branch {
                id: "R".to_string(),
                parent_branch_id: None,
                branch_point_node_id: None,
                depth: 0,
                color: None,
                metadata: None,
            },
            Branch {
                id: "A".to_string(),
                parent_branch_id: Some("R".to_string()),
                branch_point_node_id: Some("m0".to_string()),
                depth: 1,
                color: None,
                metadata: None,
            },
        ],
        vec![Message {
            id: "m0".to_string(),
            branch_id: "R".to_string(),
            kind: NodeKind::User,
            position: 0,
        }],
    );
    store
}

#[test]
fn async_update_matches_sync_update() {
    let engine = LayoutEngine::new();

    let sync_store = seeded_store();
    let sync_report = branchmap::update_positions_sync(&engine, &sync_store, "p1").unwrap();

    let async_store = seeded_store();
    let async_report =
        block_on(branchmap::update_positions(&engine, &async_store, "p1")).unwrap();

    assert_eq!(sync_report.written, async_report.written);
    assert_eq!(
        sync_store.layout("p1", "A").unwrap(),
        async_store.layout("p1", "A").unwrap()
    );
}

#[test]
fn validate_snapshot_rejects_rootless_trees() {
    let orphan = Branch {
        id: "A".to_string(),
        parent_branch_id: Some("R".to_string()),
        branch_point_node_id: Some("m0".to_string()),
        depth: 1,
        color: None,
        metadata: None,
    };
    let err = branchmap::validate_snapshot(&[orphan]).unwrap_err();
    assert!(matches!(
        err,
        branchmap::EngineError::Model(branchmap::Error::MissingRoot)
    ));
}

#[test]
fn layout_snapshot_avoids_persistence() {
    let store = seeded_store();
    let engine = LayoutEngine::new();

    let branches = store.load_branches("p1").unwrap();
    let messages = store.load_messages("p1").unwrap();
    let result = branchmap::layout_snapshot(&engine, &branches, &messages);

    assert_eq!(result.records.len(), 2);
    assert_eq!(store.layout_count("p1"), 0);
}
