//! Integration tests for editor crate

use mailcraft_blocks::props::TextProps;
use mailcraft_blocks::{Block, BlockData, BlockRegistry, Document};
use mailcraft_editor::{
    DocumentPatch, DocumentStore, HistoryConfig, InspectorTab, MainTab, RendererSet,
};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn registry() -> Arc<BlockRegistry> {
    Arc::new(BlockRegistry::standard().unwrap())
}

fn hi_document() -> Document {
    serde_json::from_value(json!({
        "root": {"type": "EmailLayout", "data": {"childrenIds": ["b1"]}},
        "b1": {"type": "Text", "data": {"props": {"text": "hi"}}}
    }))
    .unwrap()
}

fn text_patch(id: &str, text: &str) -> DocumentPatch {
    DocumentPatch::new().upsert(id, Block::Text(BlockData::new(TextProps::new(text))))
}

fn text_of(store: &DocumentStore, id: &str) -> String {
    match store.get_document().block(id) {
        Some(Block::Text(data)) => data.props_or_default().text().to_string(),
        other => panic!("expected text block, got {:?}", other),
    }
}

#[test]
fn test_set_document_then_undo() -> anyhow::Result<()> {
    let mut store = DocumentStore::new(registry(), hi_document());

    let patch = DocumentPatch::from_json(
        r#"{"b1": {"type": "Text", "data": {"props": {"text": "bye"}}}}"#,
    )?;
    let validated = store.propose_patch(patch)?;
    store.set_document(validated);

    assert_eq!(text_of(&store, "b1"), "bye");
    assert!(store.can_undo());

    assert!(store.undo());
    assert_eq!(text_of(&store, "b1"), "hi");
    assert!(store.can_redo());
    Ok(())
}

#[test]
fn test_undo_redo_restores_post_patch_document() {
    let mut store = DocumentStore::new(registry(), hi_document());
    store.apply_patch(text_patch("b1", "bye")).unwrap();
    let after_patch = store.get_document().clone();

    store.undo();
    store.redo();
    assert_eq!(store.get_document(), &after_patch);

    // empty future
    assert!(!store.redo());
    assert_eq!(store.get_document(), &after_patch);
}

#[test]
fn test_history_is_linear() {
    let config = HistoryConfig::default().without_coalescing();
    let mut store = DocumentStore::with_config(registry(), hi_document(), config);

    store.apply_patch(text_patch("b1", "first")).unwrap();
    store.undo();
    store.apply_patch(text_patch("b1", "second")).unwrap();

    assert!(!store.can_redo());
    assert!(!store.redo());
    assert_eq!(text_of(&store, "b1"), "second");
}

#[test]
fn test_rapid_typing_is_one_undo_step() {
    let mut store = DocumentStore::new(registry(), hi_document());
    let start = Instant::now();

    for (i, text) in ["h", "he", "hel", "hell", "hello"].iter().enumerate() {
        let patch = store.propose_patch(text_patch("b1", text)).unwrap();
        store.set_document_at(patch, start + Duration::from_millis(150 * i as u64));
    }

    assert_eq!(store.undo_levels(), 1);
    store.undo();
    assert_eq!(text_of(&store, "b1"), "hi");
}

#[test]
fn test_invalid_patch_is_dropped() {
    let mut store = DocumentStore::new(registry(), hi_document());
    let before = store.get_document().clone();

    let patch: DocumentPatch = serde_json::from_value(json!({
        "b1": {"type": "Text", "data": {"props": {"text": 42}}}
    }))
    .unwrap();

    assert!(store.propose_patch(patch.clone()).is_err());
    assert!(store.apply_patch(patch).is_err());
    assert_eq!(store.get_document(), &before);
    assert!(!store.can_undo());
}

#[test]
fn test_selection_cleared_by_reset() {
    let mut store = DocumentStore::new(registry(), hi_document());
    store.set_selected_block_id(Some("b1"));
    assert_eq!(store.selected_block_id(), Some("b1"));
    assert_eq!(store.inspector_tab(), InspectorTab::BlockConfiguration);

    store.reset_document(Document::with_empty_layout());
    assert_eq!(store.selected_block_id(), None);
    assert!(!store.can_undo());
}

#[test]
fn test_stale_selection_reads_as_none_after_undo() {
    let mut store = DocumentStore::new(registry(), Document::with_empty_layout());
    store.apply_patch(text_patch("b1", "new")).unwrap();
    store.set_selected_block_id(Some("b1"));

    store.undo();
    assert_eq!(store.selected_block_id(), None);
}

#[test]
fn test_round_trip_through_store() {
    let store = DocumentStore::new(registry(), hi_document());
    let json = store.get_document().to_json().unwrap();
    let reloaded = Document::from_json(&json).unwrap();
    assert_eq!(&reloaded, store.get_document());
}

#[test]
fn test_batch_is_one_undo_step() {
    let config = HistoryConfig::default().without_coalescing();
    let mut store = DocumentStore::with_config(registry(), hi_document(), config);

    store.begin_batch(Some("Rewrite"));
    store.apply_patch(text_patch("b1", "one")).unwrap();
    store.apply_patch(text_patch("b2", "two")).unwrap();
    store.end_batch();

    assert_eq!(store.undo_levels(), 1);
    assert_eq!(store.history().undo_description(), Some("Rewrite"));

    store.undo();
    assert_eq!(store.get_document(), &hi_document());
}

#[test]
fn test_main_tab_selects_renderer_set() {
    let mut store = DocumentStore::new(registry(), hi_document());
    assert_eq!(store.main_tab().renderer_set(), Some(RendererSet::Editor));

    store.set_main_tab(MainTab::Preview);
    assert_eq!(store.main_tab().renderer_set(), Some(RendererSet::Reader));
}
