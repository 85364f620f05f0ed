//! # Mailcraft Editor
//!
//! Editing state for a block document: the store that owns the document,
//! validated patches, undo/redo history and the edit session.
//!
//! ## Architecture
//!
//! ```text
//! inspector / tune menu
//!          ↓ DocumentPatch / Mutation
//! ┌─────────────────────────────────────────────┐
//! │ DocumentStore                               │
//! │  - propose_patch: registry validation       │
//! │  - set_document: commit + record history    │
//! │  - undo / redo / reset_document             │
//! │  - selection + inspector/main tabs          │
//! └─────────────────────────────────────────────┘
//!          ↓ &Document
//! renderer (editor or reader set)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mailcraft_editor::{DocumentPatch, DocumentStore};
//!
//! let registry = Arc::new(BlockRegistry::standard()?);
//! let mut store = DocumentStore::new(registry, document);
//!
//! let patch = DocumentPatch::from_json(r#"{"b1": {"type": "Text", "data": {"props": {"text": "bye"}}}}"#)?;
//! let validated = store.propose_patch(patch)?;
//! store.set_document(validated);
//!
//! store.undo();
//! ```

mod errors;
mod history;
mod mutations;
mod patch;
mod session;
mod shortcuts;
mod store;

pub use errors::EditorError;
pub use history::{History, HistoryConfig, Snapshot};
pub use mutations::{Direction, Mutation, MutationError, MutationResult, PlannedMutation};
pub use patch::{DocumentPatch, ValidatedPatch};
pub use session::{EditSession, InspectorTab, MainTab, RendererSet};
pub use shortcuts::{HistoryCommand, KeyChord};
pub use store::DocumentStore;

// Re-export block model types for convenience
pub use mailcraft_blocks::{Block, BlockRegistry, Document, ROOT_BLOCK_ID};
