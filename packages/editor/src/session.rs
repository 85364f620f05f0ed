//! # Edit Session State
//!
//! Everything about the editor that is not the document: which block is
//! selected, which inspector panel is open and which main view is showing.
//!
//! None of this is recorded in history. Undo restores documents, not
//! selections.

use serde::{Deserialize, Serialize};

/// Inspector panel shown in the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InspectorTab {
    /// Global email styles (the root layout)
    #[default]
    Styles,

    /// Props and style of the selected block
    BlockConfiguration,
}

/// Main view of the editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainTab {
    #[default]
    Editor,
    Preview,
    Json,
    Html,
}

/// Which renderer set draws the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RendererSet {
    /// Interactive tree with selection outlines and tune menus
    Editor,

    /// Email HTML as a mail client would receive it
    Reader,
}

impl MainTab {
    /// Renderer set drawing this view. The JSON view shows the raw document
    /// and renders no blocks.
    pub fn renderer_set(&self) -> Option<RendererSet> {
        match self {
            MainTab::Editor => Some(RendererSet::Editor),
            MainTab::Preview | MainTab::Html => Some(RendererSet::Reader),
            MainTab::Json => None,
        }
    }
}

/// Editor state for one open document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    /// Raw selected id; may point to a block that no longer exists
    selected_block_id: Option<String>,

    pub inspector_tab: InspectorTab,

    pub main_tab: MainTab,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored selection, without checking it against any document
    pub fn raw_selection(&self) -> Option<&str> {
        self.selected_block_id.as_deref()
    }

    /// Select a block (or clear the selection). Selecting a block opens its
    /// configuration panel; clearing leaves the inspector where it was.
    pub fn select(&mut self, block_id: Option<String>) {
        if block_id.is_some() {
            self.inspector_tab = InspectorTab::BlockConfiguration;
        }
        self.selected_block_id = block_id;
    }

    pub fn clear_selection(&mut self) {
        self.selected_block_id = None;
    }
}
