//! # Editor Renderer
//!
//! Interactive view of the document. Every block is wrapped in a selectable
//! container keyed by its id; the selected block gets a solid outline and a
//! tune menu, the hovered block a lighter outline.
//!
//! Events are dispatched against the rendered tree: starting at the target
//! element and walking up through its ancestors, the first element with a
//! matching handler consumes the event and propagation stops. Clicking a
//! nested block therefore selects the innermost block.

use crate::content;
use crate::style;
use crate::vdom::{Handler, TuneAction, VNode};
use mailcraft_blocks::{resolve, Block, BlockRegistry, Diagnostic, Document, ResolvedBlock};
use mailcraft_editor::{Direction, DocumentStore, EditorError, Mutation};
use tracing::{debug, warn};

pub const SELECTED_OUTLINE: &str = "2px solid rgba(0,121,204,1)";
pub const HOVERED_OUTLINE: &str = "2px solid rgba(0,121,204,0.3)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Click,
    MouseEnter,
    MouseLeave,
}

/// What a dispatched event asks the editor to do
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    Select(Option<String>),
    Hover(Option<String>),
    Mutate(Mutation),
}

/// Rendered editor tree
#[derive(Debug, Clone, PartialEq)]
pub struct EditorView {
    pub root: Option<VNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EditorView {
    /// Walk `event` from the element keyed `target` up to the root and
    /// return the action of the first handler that takes it
    pub fn dispatch(&self, event: UiEvent, target: &str) -> Option<EditorAction> {
        let root = self.root.as_ref()?;
        let path = root.path_to(target)?;

        path.iter()
            .rev()
            .find_map(|node| node.handlers().iter().find_map(|h| action_for(event, h)))
    }
}

fn action_for(event: UiEvent, handler: &Handler) -> Option<EditorAction> {
    match (event, handler) {
        (UiEvent::Click, Handler::Select(id)) => Some(EditorAction::Select(Some(id.clone()))),
        (UiEvent::Click, Handler::ClearSelection) => Some(EditorAction::Select(None)),
        (UiEvent::Click, Handler::Tune(id, action)) => Some(EditorAction::Mutate(tune_mutation(id, *action))),
        (UiEvent::MouseEnter, Handler::Hover(id)) => Some(EditorAction::Hover(Some(id.clone()))),
        (UiEvent::MouseLeave, Handler::Hover(_)) => Some(EditorAction::Hover(None)),
        _ => None,
    }
}

fn tune_mutation(block_id: &str, action: TuneAction) -> Mutation {
    let block_id = block_id.to_string();
    match action {
        TuneAction::MoveUp => Mutation::ShiftBlock {
            block_id,
            direction: Direction::Up,
        },
        TuneAction::MoveDown => Mutation::ShiftBlock {
            block_id,
            direction: Direction::Down,
        },
        TuneAction::Duplicate => Mutation::DuplicateBlock { block_id },
        TuneAction::Delete => Mutation::RemoveBlock { block_id },
    }
}

/// Key of a tune menu button
pub fn tune_key(block_id: &str, action: TuneAction) -> String {
    format!("{}:{}", block_id, action.name())
}

/// Editor renderer with its hover state. Selection lives in the store.
#[derive(Debug, Default)]
pub struct EditorRenderer {
    hovered: Option<String>,
}

impl EditorRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Render the store's document with its current selection
    pub fn render(&self, store: &DocumentStore, root_id: &str) -> EditorView {
        let document = store.get_document();
        let hovered = self.hovered().filter(|id| document.contains(id));
        render_editor(
            store.registry(),
            document,
            root_id,
            store.selected_block_id(),
            hovered,
        )
    }

    /// Dispatch an event and apply the resulting action. Returns the action
    /// taken, if any.
    pub fn handle_event(
        &mut self,
        store: &mut DocumentStore,
        root_id: &str,
        event: UiEvent,
        target: &str,
    ) -> Result<Option<EditorAction>, EditorError> {
        let view = self.render(store, root_id);
        let Some(action) = view.dispatch(event, target) else {
            return Ok(None);
        };

        debug!(?event, key = target, ?action, "editor event");
        match &action {
            EditorAction::Select(id) => store.set_selected_block_id(id.as_deref()),
            EditorAction::Hover(id) => self.hovered = id.clone(),
            EditorAction::Mutate(mutation) => {
                store.apply_mutation(mutation.clone())?;
            }
        }

        Ok(Some(action))
    }
}

/// Pure editor render of `document` from `root_id`
pub fn render_editor(
    registry: &BlockRegistry,
    document: &Document,
    root_id: &str,
    selected: Option<&str>,
    hovered: Option<&str>,
) -> EditorView {
    let tree = resolve(document, root_id);
    let walker = Walker {
        registry,
        selected: selected.filter(|id| document.contains(id)),
        hovered,
    };
    let root = tree.root.as_ref().and_then(|root| walker.render_block(root));

    EditorView {
        root,
        diagnostics: tree.diagnostics,
    }
}

struct Walker<'a> {
    registry: &'a BlockRegistry,
    selected: Option<&'a str>,
    hovered: Option<&'a str>,
}

impl<'a> Walker<'a> {
    fn render_children(&self, node: &ResolvedBlock) -> Vec<VNode> {
        node.children
            .iter()
            .filter_map(|child| self.render_block(child))
            .collect()
    }

    fn render_block(&self, node: &ResolvedBlock) -> Option<VNode> {
        if let Err(err) = self.registry.check(node.block) {
            warn!(block_id = node.id, "skipping block: {}", err);
            return None;
        }

        let body = match node.block {
            Block::Text(data) => content::text(data),
            Block::Image(data) => content::image(data),
            Block::Button(data) => content::button(data),
            Block::Divider(data) => content::divider(data),
            Block::Spacer(data) => content::spacer(data),
            Block::Avatar(data) => content::avatar(data),
            Block::Html(data) => content::html(data),
            Block::Container(data) => {
                let mut body = content::container(data.style.as_ref(), self.render_children(node));
                if let Some(url) = data.style.as_ref().and_then(|s| s.background_image.as_ref()) {
                    body = body
                        .with_style("background-image", style::background_image(url))
                        .with_style("background-size", "cover")
                        .with_style("background-position", "center");
                }
                body
            }
            Block::ColumnsContainer(data) => content::columns(data, self.render_children(node)),
            Block::EmailLayout(data) => {
                let props = data.props_or_default();
                let mut canvas = VNode::element("div").with_styles(content::canvas_declarations(&props));
                if let Some(rule) = content::link_color_rule(&props) {
                    canvas = canvas.with_child(rule);
                }

                let mut backdrop = VNode::element("div")
                    .with_attr("data-block-id", node.id)
                    .with_key(node.id)
                    .with_handler(Handler::ClearSelection)
                    .with_styles(content::layout_declarations(&props))
                    .with_style("padding", content::layout_padding(data))
                    .with_style("min-height", "100%")
                    .with_style("width", "100%");
                if let Some(url) = data.style.as_ref().and_then(|s| s.background_image.as_ref()) {
                    backdrop = backdrop.with_style("background-image", style::background_image(url));
                }

                return Some(backdrop.with_child(canvas.with_children(self.render_children(node))));
            }
        };

        Some(self.wrap(node.id, body))
    }

    /// Selectable container around a block body
    fn wrap(&self, id: &str, body: VNode) -> VNode {
        let is_selected = self.selected == Some(id);
        let is_hovered = !is_selected && self.hovered == Some(id);

        let mut wrapper = VNode::element("div")
            .with_attr("data-block-id", id)
            .with_key(id)
            .with_handler(Handler::Select(id.to_string()))
            .with_handler(Handler::Hover(id.to_string()))
            .with_style("position", "relative")
            .with_style("max-width", "100%")
            .with_style("outline-offset", "-1px");

        if is_selected {
            wrapper = wrapper.with_style("outline", SELECTED_OUTLINE);
        } else if is_hovered {
            wrapper = wrapper.with_style("outline", HOVERED_OUTLINE);
        }

        wrapper = wrapper.with_child(body);
        if is_selected {
            wrapper = wrapper.with_child(tune_menu(id));
        }
        wrapper
    }
}

fn tune_menu(block_id: &str) -> VNode {
    let buttons = TuneAction::ALL
        .iter()
        .map(|action| {
            VNode::element("button")
                .with_attr("type", "button")
                .with_attr("title", action.label())
                .with_attr("data-tune-action", action.name())
                .with_key(tune_key(block_id, *action))
                .with_handler(Handler::Tune(block_id.to_string(), *action))
                .with_child(VNode::text(action.label()))
        })
        .collect();

    VNode::element("div")
        .with_attr("class", "tune-menu")
        .with_style("position", "absolute")
        .with_style("top", "0")
        .with_style("left", "-56px")
        .with_style("display", "flex")
        .with_style("flex-direction", "column")
        .with_children(buttons)
}
