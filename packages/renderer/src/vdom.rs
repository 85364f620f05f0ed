use crate::style::CssDeclarations;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What an element does when the editor dispatches an event to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handler {
    /// Click selects this block
    Select(String),

    /// Click clears the selection
    ClearSelection,

    /// Pointer entering highlights this block
    Hover(String),

    /// Click runs a tune menu action on this block
    Tune(String, TuneAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuneAction {
    MoveUp,
    MoveDown,
    Duplicate,
    Delete,
}

impl TuneAction {
    pub const ALL: [TuneAction; 4] = [
        TuneAction::MoveUp,
        TuneAction::MoveDown,
        TuneAction::Duplicate,
        TuneAction::Delete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TuneAction::MoveUp => "move-up",
            TuneAction::MoveDown => "move-down",
            TuneAction::Duplicate => "duplicate",
            TuneAction::Delete => "delete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TuneAction::MoveUp => "Move up",
            TuneAction::MoveDown => "Move down",
            TuneAction::Duplicate => "Duplicate",
            TuneAction::Delete => "Delete",
        }
    }
}

/// Virtual DOM node shared by both renderer sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: CssDeclarations,
        children: Vec<VNode>,
        /// Stable key for event targeting in the editor view
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        handlers: Vec<Handler>,
    },

    /// Text node (escaped on output)
    Text { content: String },

    /// Trusted markup emitted verbatim (Html blocks, rendered markdown)
    Html { markup: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: CssDeclarations::new(),
            children: Vec::new(),
            key: None,
            handlers: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn html(markup: impl Into<String>) -> Self {
        VNode::Html {
            markup: markup.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.set(property, value);
        }
        self
    }

    pub fn with_styles(mut self, declarations: CssDeclarations) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.extend(declarations);
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn with_handler(mut self, handler: Handler) -> Self {
        if let VNode::Element {
            ref mut handlers, ..
        } = self
        {
            handlers.push(handler);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            VNode::Element { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn styles(&self) -> Option<&CssDeclarations> {
        match self {
            VNode::Element { styles, .. } => Some(styles),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn handlers(&self) -> &[Handler] {
        match self {
            VNode::Element { handlers, .. } => handlers,
            _ => &[],
        }
    }

    /// Elements from this node down to the element keyed `key`, outermost
    /// first
    pub fn path_to(&self, key: &str) -> Option<Vec<&VNode>> {
        if self.key() == Some(key) {
            return Some(vec![self]);
        }

        for child in self.children() {
            if let Some(mut path) = child.path_to(key) {
                path.insert(0, self);
                return Some(path);
            }
        }

        None
    }

    /// First element (depth-first) carrying `data-block-id = block_id`
    pub fn find_block(&self, block_id: &str) -> Option<&VNode> {
        if self.attr("data-block-id") == Some(block_id) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_block(block_id))
    }

    /// Count of elements with a `data-block-id` attribute
    pub fn block_count(&self) -> usize {
        let own = usize::from(self.attr("data-block-id").is_some());
        own + self
            .children()
            .iter()
            .map(VNode::block_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let node = VNode::element("div")
            .with_attr("data-block-id", "b1")
            .with_style("padding", "8px 8px 8px 8px")
            .with_child(VNode::text("hi"));

        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.attr("data-block-id"), Some("b1"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(
            node.styles().and_then(|s| s.get("padding")),
            Some("8px 8px 8px 8px")
        );
    }

    #[test]
    fn test_path_to_key() {
        let tree = VNode::element("div").with_key("outer").with_child(
            VNode::element("div")
                .with_key("middle")
                .with_child(VNode::element("span").with_key("inner")),
        );

        let path = tree.path_to("inner").unwrap();
        let keys: Vec<_> = path.iter().filter_map(|node| node.key()).collect();
        assert_eq!(keys, vec!["outer", "middle", "inner"]);
        assert!(tree.path_to("missing").is_none());
    }
}
