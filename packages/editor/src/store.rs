//! # Document Store
//!
//! Owns the open document, its history and the edit session.
//!
//! All document changes go through [`DocumentStore::set_document`] with a
//! [`ValidatedPatch`], so history always sees every commit and a patch that
//! failed validation never touches the document.

use crate::errors::EditorError;
use crate::history::{History, HistoryConfig};
use crate::mutations::{Mutation, MutationResult};
use crate::patch::{DocumentPatch, ValidatedPatch};
use crate::session::{EditSession, InspectorTab, MainTab};
use crate::shortcuts::{HistoryCommand, KeyChord};
use mailcraft_blocks::{BlockIdGenerator, BlockRegistry, Document, ValidationError};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub struct DocumentStore {
    registry: Arc<BlockRegistry>,
    document: Document,
    history: History,
    session: EditSession,
    ids: BlockIdGenerator,

    /// Bumped on every document change, including undo/redo
    version: u64,
}

impl DocumentStore {
    pub fn new(registry: Arc<BlockRegistry>, document: Document) -> Self {
        Self::with_config(registry, document, HistoryConfig::default())
    }

    pub fn with_config(
        registry: Arc<BlockRegistry>,
        document: Document,
        config: HistoryConfig,
    ) -> Self {
        Self {
            registry,
            document,
            history: History::new(config),
            session: EditSession::new(),
            ids: BlockIdGenerator::new("document"),
            version: 0,
        }
    }

    /// Seed ids of newly created blocks from a document name
    pub fn with_document_name(mut self, name: &str) -> Self {
        self.ids = BlockIdGenerator::new(name);
        self
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn get_document(&self) -> &Document {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Validate a patch against the registry without committing it
    pub fn propose_patch(&self, patch: DocumentPatch) -> Result<ValidatedPatch, ValidationError> {
        ValidatedPatch::propose(&self.registry, patch)
    }

    /// Commit a validated patch. The pre-edit document goes to history.
    pub fn set_document(&mut self, patch: ValidatedPatch) {
        self.set_document_at(patch, Instant::now());
    }

    /// Like [`set_document`](Self::set_document) with an explicit edit time,
    /// which decides whether the edit coalesces with the previous one
    pub fn set_document_at(&mut self, patch: ValidatedPatch, at: Instant) {
        let touched = patch.single_block_id().map(str::to_string);
        self.commit(patch, touched.as_deref(), at);
    }

    fn commit(&mut self, patch: ValidatedPatch, touched: Option<&str>, at: Instant) {
        if patch.is_empty() {
            return;
        }

        self.history.record(&self.document, touched, at);
        debug!(blocks = patch.len(), ?touched, "committing patch");
        self.document.merge(patch.into_nodes());
        self.version += 1;
    }

    /// Propose and commit in one step
    pub fn apply_patch(&mut self, patch: DocumentPatch) -> Result<(), ValidationError> {
        let validated = self.propose_patch(patch)?;
        self.set_document(validated);
        Ok(())
    }

    /// Replace the whole document (e.g. on template load). History is
    /// cleared, and so is a selection that no longer exists.
    pub fn reset_document(&mut self, document: Document) {
        debug!(blocks = document.len(), "resetting document");
        self.document = document;
        self.history.clear();
        self.version += 1;

        let stale = self
            .session
            .raw_selection()
            .is_some_and(|id| !self.document.contains(id));
        if stale {
            self.session.clear_selection();
        }
    }

    /// Apply a structural mutation as one undo step
    pub fn apply_mutation(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let planned = mutation.plan(&self.document, &mut self.ids)?;
        let validated = self.propose_patch(planned.patch)?;

        self.commit(validated, None, Instant::now());

        if let Mutation::RemoveBlock { block_id } = &mutation {
            if self.session.raw_selection() == Some(block_id.as_str()) {
                self.session.clear_selection();
            }
        }

        Ok(MutationResult {
            version: self.version,
            created: planned.created,
        })
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.document);
        if undone {
            self.version += 1;
            debug!(version = self.version, "undo");
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.document);
        if redone {
            self.version += 1;
            debug!(version = self.version, "redo");
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_levels(&self) -> usize {
        self.history.undo_levels()
    }

    pub fn redo_levels(&self) -> usize {
        self.history.redo_levels()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Group every commit until `end_batch` into one undo step
    pub fn begin_batch(&mut self, description: Option<&str>) {
        self.history.begin_batch();
        if let Some(description) = description {
            self.history.set_batch_description(description);
        }
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    /// Run a keyboard shortcut. Returns true if it changed the document.
    pub fn handle_shortcut(&mut self, chord: &KeyChord) -> bool {
        match HistoryCommand::from_chord(chord) {
            Some(HistoryCommand::Undo) => self.undo(),
            Some(HistoryCommand::Redo) => self.redo(),
            None => false,
        }
    }

    /// Selected block id, or `None` when the stored id is no longer in the
    /// document (for example after undoing the block's creation)
    pub fn selected_block_id(&self) -> Option<&str> {
        self.session
            .raw_selection()
            .filter(|id| self.document.contains(id))
    }

    pub fn set_selected_block_id(&mut self, block_id: Option<&str>) {
        self.session.select(block_id.map(str::to_string));
    }

    pub fn inspector_tab(&self) -> InspectorTab {
        self.session.inspector_tab
    }

    pub fn set_inspector_tab(&mut self, tab: InspectorTab) {
        self.session.inspector_tab = tab;
    }

    pub fn main_tab(&self) -> MainTab {
        self.session.main_tab
    }

    pub fn set_main_tab(&mut self, tab: MainTab) {
        self.session.main_tab = tab;
    }
}
