//! # Reader Renderer
//!
//! Static, email-client-safe HTML.
//!
//! - Blocks with a `backgroundImage` are wrapped in a table cell carrying the
//!   image twice: as CSS `background-image` and as the legacy `background`
//!   attribute, for clients that strip CSS backgrounds.
//! - The EmailLayout root becomes an outer 100%-wide table (backdrop) around
//!   an inner 600px table (canvas).

use crate::content;
use crate::html::{document_markup, ReaderOptions};
use crate::style;
use crate::vdom::VNode;
use mailcraft_blocks::props::EmailLayoutProps;
use mailcraft_blocks::{
    resolve, Block, BlockData, BlockRegistry, BlockStyle, Diagnostic, Document, ResolvedBlock,
};
use tracing::{debug, warn};

/// Output of a reader render
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderOutput {
    /// Root node, `None` when the root block could not be resolved
    pub root: Option<VNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ReaderOutput {
    /// Full HTML document
    pub fn to_html(&self, options: &ReaderOptions) -> String {
        let empty = VNode::element("div");
        document_markup(self.root.as_ref().unwrap_or(&empty), options)
    }
}

pub struct ReaderRenderer<'r> {
    registry: &'r BlockRegistry,
}

impl<'r> ReaderRenderer<'r> {
    pub fn new(registry: &'r BlockRegistry) -> Self {
        Self { registry }
    }

    pub fn render(&self, document: &Document, root_id: &str) -> ReaderOutput {
        let tree = resolve(document, root_id);
        let root = tree.root.as_ref().and_then(|root| self.render_block(root));
        debug!(root_id, diagnostics = tree.diagnostics.len(), "rendered reader tree");

        ReaderOutput {
            root,
            diagnostics: tree.diagnostics,
        }
    }

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
                content::container(data.style.as_ref(), self.render_children(node))
            }
            Block::ColumnsContainer(data) => content::columns(data, self.render_children(node)),
            Block::EmailLayout(data) => return Some(self.layout(data, self.render_children(node))),
        };

        Some(with_background_image(body, node.block.style()))
    }

    fn layout(&self, data: &BlockData<EmailLayoutProps>, children: Vec<VNode>) -> VNode {
        let props = data.props_or_default();

        let mut canvas_cell = VNode::element("td");
        if let Some(rule) = content::link_color_rule(&props) {
            canvas_cell = canvas_cell.with_child(rule);
        }
        let canvas = content::presentation_table(&EmailLayoutProps::CANVAS_WIDTH.to_string())
            .with_attr("align", "center")
            .with_style("width", style::px(EmailLayoutProps::CANVAS_WIDTH))
            .with_styles(content::canvas_declarations(&props))
            .with_child(
                VNode::element("tbody").with_child(
                    VNode::element("tr")
                        .with_style("width", "100%")
                        .with_child(canvas_cell.with_children(children)),
                ),
            );

        let mut backdrop_cell = VNode::element("td")
            .with_attr("align", "center")
            .with_style("padding", content::layout_padding(data));
        if let Some(url) = data.style.as_ref().and_then(|s| s.background_image.as_ref()) {
            backdrop_cell = dual_background(backdrop_cell, url);
        }

        content::presentation_table("100%")
            .with_attr("bgcolor", props.backdrop_color())
            .with_styles(content::layout_declarations(&props))
            .with_style("width", "100%")
            .with_child(
                VNode::element("tbody").with_child(
                    VNode::element("tr").with_child(backdrop_cell.with_child(canvas)),
                ),
            )
    }
}

/// Set the image as CSS and as the `background` attribute of a cell
fn dual_background(cell: VNode, url: &str) -> VNode {
    cell.with_attr("background", url)
        .with_style("background-image", style::background_image(url))
        .with_style("background-size", "cover")
        .with_style("background-position", "center")
        .with_style("background-repeat", "no-repeat")
}

fn with_background_image(body: VNode, style: Option<&BlockStyle>) -> VNode {
    let Some(url) = style.and_then(|style| style.background_image.as_ref()) else {
        return body;
    };

    let cell = dual_background(VNode::element("td"), url).with_child(body);
    content::presentation_table("100%").with_child(
        VNode::element("tbody").with_child(VNode::element("tr").with_child(cell)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(document: serde_json::Value) -> ReaderOutput {
        let registry = BlockRegistry::standard().unwrap();
        let document: Document = serde_json::from_value(document).unwrap();
        ReaderRenderer::new(&registry).render(&document, "root")
    }

    #[test]
    fn test_background_image_dual_encoding() {
        let output = render(json!({
            "root": {"type": "EmailLayout", "data": {"childrenIds": ["hero"]}},
            "hero": {"type": "Container", "data": {
                "style": {"backgroundImage": "https://example.com/hero.png"},
                "childrenIds": []
            }}
        }));

        let html = output.to_html(&ReaderOptions::default());
        assert!(html.contains("background=\"https://example.com/hero.png\""));
        assert!(html.contains("background-image: url(&quot;https://example.com/hero.png&quot;)"));
    }

    #[test]
    fn test_layout_tables() {
        let output = render(json!({
            "root": {"type": "EmailLayout", "data": {"props": {"backdropColor": "#EEEEEE"}, "childrenIds": []}}
        }));

        let root = output.root.as_ref().unwrap();
        assert_eq!(root.tag(), Some("table"));
        assert_eq!(root.attr("width"), Some("100%"));
        assert_eq!(root.attr("bgcolor"), Some("#EEEEEE"));

        let html = output.to_html(&ReaderOptions::default());
        assert!(html.contains("width=\"600\""));
        assert!(html.contains("max-width: 600px"));
    }

    #[test]
    fn test_missing_root_renders_nothing() {
        let output = render(json!({}));
        assert!(output.root.is_none());
        assert_eq!(
            output.diagnostics,
            vec![Diagnostic::MissingRoot {
                id: "root".to_string()
            }]
        );
    }
}
