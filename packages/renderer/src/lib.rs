//! # Mailcraft Renderer
//!
//! Two renderer sets over the same document and registry:
//!
//! - **Editor**: interactive [`VNode`] tree with selection, hover and tune
//!   menus ([`EditorRenderer`])
//! - **Reader**: email-safe static HTML ([`ReaderRenderer`])
//!
//! Both walk the tree produced by `mailcraft_blocks::resolve`, match every
//! block type exhaustively and share the style translation in [`style`], so
//! padding and border strings are identical in the editor and in exported
//! HTML.

pub mod content;
pub mod editor;
pub mod html;
pub mod markdown;
pub mod reader;
pub mod style;
pub mod vdom;


pub use editor::{render_editor, EditorAction, EditorRenderer, EditorView, UiEvent};
pub use html::{escape_html, ReaderOptions};
pub use mailcraft_editor::RendererSet;
pub use reader::{ReaderOutput, ReaderRenderer};
pub use style::CssDeclarations;
pub use vdom::{Handler, TuneAction, VNode};

use mailcraft_blocks::{BlockRegistry, Document};
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("Cannot save an empty email: add at least one block to '{0}'")]
    EmptyDocument(String),
}

/// Render a document to a static HTML string
pub fn render_to_static_markup(
    document: &Document,
    root_id: &str,
    registry: &BlockRegistry,
) -> String {
    render_with_options(document, root_id, registry, &ReaderOptions::default())
}

pub fn render_with_options(
    document: &Document,
    root_id: &str,
    registry: &BlockRegistry,
    options: &ReaderOptions,
) -> String {
    ReaderRenderer::new(registry)
        .render(document, root_id)
        .to_html(options)
}

/// Save-flow export: refuses a document whose root has no children
#[instrument(level = "debug", skip(document, registry, options), fields(blocks = document.len()))]
pub fn export_html(
    document: &Document,
    root_id: &str,
    registry: &BlockRegistry,
    options: &ReaderOptions,
) -> Result<String, ExportError> {
    let is_empty = document
        .block(root_id)
        .map(|root| root.children_ids().is_empty())
        .unwrap_or(true);
    if is_empty {
        return Err(ExportError::EmptyDocument(root_id.to_string()));
    }

    Ok(render_with_options(document, root_id, registry, options))
}
