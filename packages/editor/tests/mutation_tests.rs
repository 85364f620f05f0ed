//! Structural mutations applied through the store

use mailcraft_blocks::{Block, BlockRegistry, BlockType, Document, ROOT_BLOCK_ID};
use mailcraft_editor::{DocumentStore, Direction, EditorError, Mutation, MutationError};
use serde_json::json;
use std::sync::Arc;

fn store() -> DocumentStore {
    let document: Document = serde_json::from_value(json!({
        "root": {"type": "EmailLayout", "data": {"childrenIds": ["a", "box"]}},
        "a": {"type": "Text", "data": {"props": {"text": "a"}}},
        "box": {"type": "Container", "data": {"childrenIds": ["b", "c"]}},
        "b": {"type": "Text", "data": {"props": {"text": "b"}}},
        "c": {"type": "Divider", "data": {}}
    }))
    .unwrap();

    let registry = Arc::new(BlockRegistry::standard().unwrap());
    DocumentStore::new(registry, document).with_document_name("mutations")
}

fn children(store: &DocumentStore, id: &str) -> Vec<String> {
    store
        .get_document()
        .block(id)
        .map(|block| block.children_ids().to_vec())
        .unwrap_or_default()
}

#[test]
fn test_shift_block_down_and_undo() {
    let mut store = store();

    store
        .apply_mutation(Mutation::ShiftBlock {
            block_id: "b".to_string(),
            direction: Direction::Down,
        })
        .unwrap();
    assert_eq!(children(&store, "box"), vec!["c", "b"]);

    store.undo();
    assert_eq!(children(&store, "box"), vec!["b", "c"]);
}

#[test]
fn test_shift_past_edge_records_nothing() {
    let mut store = store();

    store
        .apply_mutation(Mutation::ShiftBlock {
            block_id: "c".to_string(),
            direction: Direction::Down,
        })
        .unwrap();

    assert!(!store.can_undo());
    assert_eq!(store.version(), 0);
}

#[test]
fn test_insert_block() {
    let mut store = store();

    let result = store
        .apply_mutation(Mutation::InsertBlock {
            parent_id: ROOT_BLOCK_ID.to_string(),
            index: 1,
            block: Block::starter(BlockType::Button),
        })
        .unwrap();

    let created = result.created.unwrap();
    assert_eq!(children(&store, ROOT_BLOCK_ID), vec!["a", created.as_str(), "box"]);
    assert_eq!(
        store.get_document().block(&created).map(Block::block_type),
        Some(BlockType::Button)
    );
}

#[test]
fn test_move_between_containers() {
    let mut store = store();

    store
        .apply_mutation(Mutation::MoveBlock {
            block_id: "a".to_string(),
            new_parent_id: "box".to_string(),
            index: 1,
        })
        .unwrap();

    assert_eq!(children(&store, ROOT_BLOCK_ID), vec!["box"]);
    assert_eq!(children(&store, "box"), vec!["b", "a", "c"]);

    // one undo step for both parents
    store.undo();
    assert_eq!(children(&store, ROOT_BLOCK_ID), vec!["a", "box"]);
    assert_eq!(children(&store, "box"), vec!["b", "c"]);
}

#[test]
fn test_move_into_descendant_fails() {
    let mut store = store();
    let before = store.get_document().clone();

    let err = store
        .apply_mutation(Mutation::MoveBlock {
            block_id: "box".to_string(),
            new_parent_id: "box".to_string(),
            index: 0,
        })
        .unwrap_err();

    assert_eq!(err, EditorError::Mutation(MutationError::CycleDetected));
    assert_eq!(store.get_document(), &before);
}

#[test]
fn test_remove_clears_selection() {
    let mut store = store();
    store.set_selected_block_id(Some("b"));

    store
        .apply_mutation(Mutation::RemoveBlock {
            block_id: "b".to_string(),
        })
        .unwrap();

    assert_eq!(children(&store, "box"), vec!["c"]);
    assert_eq!(store.selected_block_id(), None);

    // the block itself is kept, only detached
    assert!(store.get_document().contains("b"));
}

#[test]
fn test_duplicate_container() {
    let mut store = store();

    let result = store
        .apply_mutation(Mutation::DuplicateBlock {
            block_id: "box".to_string(),
        })
        .unwrap();

    let copy = result.created.unwrap();
    assert_eq!(children(&store, ROOT_BLOCK_ID), vec!["a", "box", copy.as_str()]);

    let copied_children = children(&store, &copy);
    assert_eq!(copied_children.len(), 2);
    assert!(!copied_children.contains(&"b".to_string()));
}

#[test]
fn test_missing_block() {
    let mut store = store();

    let err = store
        .apply_mutation(Mutation::RemoveBlock {
            block_id: "ghost".to_string(),
        })
        .unwrap_err();

    assert_eq!(
        err,
        EditorError::Mutation(MutationError::BlockNotFound("ghost".to_string()))
    );
}
