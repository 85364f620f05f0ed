//! # Undo/Redo History
//!
//! Snapshot history for the document store.
//!
//! ## Design
//!
//! - Each commit records a full snapshot of the document *before* the edit
//! - Undo swaps the current document with the newest `past` snapshot and
//!   moves the current one to `future`
//! - Redo does the reverse
//! - New commits clear `future` (linear history, no branches)
//! - Batches group several commits into one undo step
//! - Rapid edits to the same block inside the coalescing window share one
//!   undo step
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(HistoryConfig::default());
//!
//! history.record(&doc, Some("b1"), Instant::now());
//! doc.merge(patch);
//!
//! history.undo(&mut doc);
//! history.redo(&mut doc);
//! ```

use mailcraft_blocks::Document;
use std::time::{Duration, Instant};

/// Tuning for the history controller
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Maximum number of undo levels (0 = unlimited)
    pub max_levels: usize,

    /// Edits to the same single block closer together than this share a
    /// snapshot. `None` disables coalescing.
    pub coalesce_window: Option<Duration>,
}

impl HistoryConfig {
    pub const DEFAULT_COALESCE_WINDOW: Duration = Duration::from_millis(1000);

    pub fn without_coalescing(mut self) -> Self {
        self.coalesce_window = None;
        self
    }

    pub fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_levels: 100,
            coalesce_window: Some(Self::DEFAULT_COALESCE_WINDOW),
        }
    }
}

/// Full copy of a document kept in `past` or `future`
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub document: Document,

    /// Optional description of the edit this snapshot undoes
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
struct LastEdit {
    block_id: String,
    at: Instant,
}

#[derive(Debug, Default)]
struct Batch {
    recorded: bool,
    description: Option<String>,
}

#[derive(Debug)]
pub struct History {
    /// Snapshots before each edit (most recent last)
    past: Vec<Snapshot>,

    /// Snapshots replaced by undo (most recent last)
    future: Vec<Snapshot>,

    config: HistoryConfig,

    /// Candidate for coalescing with the next commit
    last_edit: Option<LastEdit>,

    /// Currently building a batch
    batch: Option<Batch>,
}

impl History {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            config,
            last_edit: None,
            batch: None,
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Record the pre-edit state of `before` for an edit touching
    /// `touched_block` (`None` when the edit spans several blocks)
    pub fn record(&mut self, before: &Document, touched_block: Option<&str>, at: Instant) {
        // New action invalidates future
        self.future.clear();

        if let Some(batch) = &mut self.batch {
            if !batch.recorded {
                batch.recorded = true;
                let description = batch.description.clone();
                self.push_snapshot(Snapshot {
                    document: before.clone(),
                    description,
                });
            }
            self.last_edit = None;
            return;
        }

        if self.coalesces_with_last(touched_block, at) {
            if let Some(last) = &mut self.last_edit {
                last.at = at;
            }
            return;
        }

        self.push_snapshot(Snapshot {
            document: before.clone(),
            description: None,
        });
        self.last_edit = touched_block.map(|block_id| LastEdit {
            block_id: block_id.to_string(),
            at,
        });
    }

    fn coalesces_with_last(&self, touched_block: Option<&str>, at: Instant) -> bool {
        let (Some(window), Some(last), Some(block_id)) =
            (self.config.coalesce_window, &self.last_edit, touched_block)
        else {
            return false;
        };

        last.block_id == block_id && at.saturating_duration_since(last.at) <= window
    }

    fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);

        // Trim if exceeded max levels
        if self.config.max_levels > 0 && self.past.len() > self.config.max_levels {
            self.past.remove(0);
        }
    }

    /// Start a batch; every commit until `end_batch` is one undo step
    pub fn begin_batch(&mut self) {
        self.batch = Some(Batch::default());
        self.last_edit = None;
    }

    pub fn end_batch(&mut self) {
        self.batch = None;
    }

    pub fn is_batching(&self) -> bool {
        self.batch.is_some()
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        if let Some(batch) = &mut self.batch {
            if batch.recorded {
                if let Some(snapshot) = self.past.last_mut() {
                    snapshot.description = Some(description.clone());
                }
            }
            batch.description = Some(description);
        }
    }

    /// Install the newest `past` snapshot into `current`. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: &mut Document) -> bool {
        let Some(snapshot) = self.past.pop() else {
            return false;
        };

        let replaced = std::mem::replace(current, snapshot.document);
        self.future.push(Snapshot {
            document: replaced,
            description: snapshot.description,
        });
        self.last_edit = None;
        true
    }

    /// Install the newest `future` snapshot into `current`. Returns false
    /// when there is nothing to redo.
    pub fn redo(&mut self, current: &mut Document) -> bool {
        let Some(snapshot) = self.future.pop() else {
            return false;
        };

        let replaced = std::mem::replace(current, snapshot.document);
        self.past.push(Snapshot {
            document: replaced,
            description: snapshot.description,
        });
        self.last_edit = None;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.last_edit = None;
        self.batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.past
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.future
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}
