use crate::props::*;
use crate::style::BlockStyle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of block types an email document can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockType {
    Text,
    Image,
    Button,
    Divider,
    Spacer,
    Avatar,
    Html,
    Container,
    ColumnsContainer,
    EmailLayout,
}

impl BlockType {
    pub const ALL: [BlockType; 10] = [
        BlockType::Text,
        BlockType::Image,
        BlockType::Button,
        BlockType::Divider,
        BlockType::Spacer,
        BlockType::Avatar,
        BlockType::Html,
        BlockType::Container,
        BlockType::ColumnsContainer,
        BlockType::EmailLayout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Text => "Text",
            BlockType::Image => "Image",
            BlockType::Button => "Button",
            BlockType::Divider => "Divider",
            BlockType::Spacer => "Spacer",
            BlockType::Avatar => "Avatar",
            BlockType::Html => "Html",
            BlockType::Container => "Container",
            BlockType::ColumnsContainer => "ColumnsContainer",
            BlockType::EmailLayout => "EmailLayout",
        }
    }

    /// Whether blocks of this type carry `childrenIds`
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            BlockType::Container | BlockType::ColumnsContainer | BlockType::EmailLayout
        )
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .iter()
            .find(|t| t.name() == s)
            .copied()
            .ok_or_else(|| format!("unknown block type '{}'", s))
    }
}

/// `data` payload of a block node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlockData<P> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<P>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children_ids: Option<Vec<String>>,
}

impl<P> BlockData<P> {
    pub fn new(props: P) -> Self {
        Self {
            props: Some(props),
            style: None,
            children_ids: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            props: None,
            style: None,
            children_ids: None,
        }
    }

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_children<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }
}

impl<P: Default + Clone> BlockData<P> {
    /// Props with unset bag replaced by defaults
    pub fn props_or_default(&self) -> P {
        self.props.clone().unwrap_or_default()
    }
}

/// A typed block: the tag is the `type` key, the payload is `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", deny_unknown_fields)]
pub enum Block {
    Text(BlockData<TextProps>),
    Image(BlockData<ImageProps>),
    Button(BlockData<ButtonProps>),
    Divider(BlockData<DividerProps>),
    Spacer(BlockData<SpacerProps>),
    Avatar(BlockData<AvatarProps>),
    Html(BlockData<HtmlProps>),
    Container(BlockData<ContainerProps>),
    ColumnsContainer(BlockData<ColumnsContainerProps>),
    EmailLayout(BlockData<EmailLayoutProps>),
}

macro_rules! with_data {
    ($block:expr, $data:ident => $body:expr) => {
        match $block {
            Block::Text($data) => $body,
            Block::Image($data) => $body,
            Block::Button($data) => $body,
            Block::Divider($data) => $body,
            Block::Spacer($data) => $body,
            Block::Avatar($data) => $body,
            Block::Html($data) => $body,
            Block::Container($data) => $body,
            Block::ColumnsContainer($data) => $body,
            Block::EmailLayout($data) => $body,
        }
    };
}

impl Block {
    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Text(_) => BlockType::Text,
            Block::Image(_) => BlockType::Image,
            Block::Button(_) => BlockType::Button,
            Block::Divider(_) => BlockType::Divider,
            Block::Spacer(_) => BlockType::Spacer,
            Block::Avatar(_) => BlockType::Avatar,
            Block::Html(_) => BlockType::Html,
            Block::Container(_) => BlockType::Container,
            Block::ColumnsContainer(_) => BlockType::ColumnsContainer,
            Block::EmailLayout(_) => BlockType::EmailLayout,
        }
    }

    pub fn style(&self) -> Option<&BlockStyle> {
        with_data!(self, data => data.style.as_ref())
    }

    pub fn children_ids(&self) -> &[String] {
        with_data!(self, data => data.children_ids.as_deref().unwrap_or(&[]))
    }

    /// Mutable child list, created empty on demand for container types
    pub fn children_ids_mut(&mut self) -> Option<&mut Vec<String>> {
        if !self.block_type().accepts_children() {
            return None;
        }
        Some(with_data!(self, data => data.children_ids.get_or_insert_with(Vec::new)))
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, Block::EmailLayout(_))
    }

    /// Serialized `data` payload as JSON
    pub fn data_value(&self) -> serde_json::Value {
        let value = with_data!(self, data => serde_json::to_value(data));
        value.unwrap_or(serde_json::Value::Null)
    }

    /// Starter block used when the inspector adds a new block of `block_type`
    pub fn starter(block_type: BlockType) -> Block {
        match block_type {
            BlockType::Text => Block::Text(BlockData::new(TextProps::new("Text"))),
            BlockType::Image => Block::Image(BlockData::new(ImageProps::default())),
            BlockType::Button => Block::Button(BlockData::new(ButtonProps {
                text: Some("Button".to_string()),
                ..Default::default()
            })),
            BlockType::Divider => Block::Divider(BlockData::new(DividerProps::default())),
            BlockType::Spacer => Block::Spacer(BlockData::new(SpacerProps::default())),
            BlockType::Avatar => Block::Avatar(BlockData::new(AvatarProps::default())),
            BlockType::Html => Block::Html(BlockData::new(HtmlProps::default())),
            BlockType::Container => {
                Block::Container(BlockData::<ContainerProps>::empty().with_children(Vec::<String>::new()))
            }
            BlockType::ColumnsContainer => Block::ColumnsContainer(
                BlockData::new(ColumnsContainerProps::default()).with_children(Vec::<String>::new()),
            ),
            BlockType::EmailLayout => Block::EmailLayout(
                BlockData::new(EmailLayoutProps::default()).with_children(Vec::<String>::new()),
            ),
        }
    }
}

/// A block node as stored in a document.
///
/// Nodes whose `type` is outside the closed set, whose `data` does not
/// decode, or that carry keys the typed structs do not know, are kept
/// verbatim so that loading and saving never loses them. Renderers skip
/// them and validation rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockNode {
    Block(Block),
    Unrecognized(RawBlock),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
    /// Node keys other than `type` and `data`
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BlockNode {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            BlockNode::Block(block) => Some(block),
            BlockNode::Unrecognized(_) => None,
        }
    }

    pub fn as_block_mut(&mut self) -> Option<&mut Block> {
        match self {
            BlockNode::Block(block) => Some(block),
            BlockNode::Unrecognized(_) => None,
        }
    }

    /// The `type` tag as written in the document
    pub fn type_name(&self) -> &str {
        match self {
            BlockNode::Block(block) => block.block_type().name(),
            BlockNode::Unrecognized(raw) => &raw.block_type,
        }
    }

    /// First node key other than `type` and `data`, if any
    pub fn unknown_key(&self) -> Option<&str> {
        match self {
            BlockNode::Block(_) => None,
            BlockNode::Unrecognized(raw) => raw.extra.keys().next().map(String::as_str),
        }
    }

    /// The `data` payload as JSON, whether or not it decoded
    pub fn data_value(&self) -> serde_json::Value {
        match self {
            BlockNode::Block(block) => block.data_value(),
            BlockNode::Unrecognized(raw) => raw.data.clone(),
        }
    }
}

impl From<Block> for BlockNode {
    fn from(block: Block) -> Self {
        BlockNode::Block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_wire_shape() {
        let block = Block::Text(BlockData::new(TextProps::new("hi")));
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value, json!({"type": "Text", "data": {"props": {"text": "hi"}}}));
    }

    #[test]
    fn test_unknown_type_kept_as_raw() {
        let node: BlockNode =
            serde_json::from_value(json!({"type": "Heading", "data": {"props": {"text": "x"}}}))
                .unwrap();
        match &node {
            BlockNode::Unrecognized(raw) => assert_eq!(raw.block_type, "Heading"),
            other => panic!("expected raw block, got {:?}", other),
        }
        assert_eq!(node.type_name(), "Heading");
        assert!(node.as_block().is_none());
    }

    #[test]
    fn test_known_type_with_bad_data_kept_as_raw() {
        let node: BlockNode =
            serde_json::from_value(json!({"type": "Spacer", "data": {"props": {"height": "tall"}}}))
                .unwrap();
        assert!(node.as_block().is_none());
        assert_eq!(node.type_name(), "Spacer");
    }

    #[test]
    fn test_block_type_from_str() {
        assert_eq!("ColumnsContainer".parse::<BlockType>(), Ok(BlockType::ColumnsContainer));
        assert!("Heading".parse::<BlockType>().is_err());
    }

    #[test]
    fn test_children_only_on_containers() {
        let mut text = Block::starter(BlockType::Text);
        assert!(text.children_ids_mut().is_none());
        assert!(text.children_ids().is_empty());

        let mut container = Block::Container(BlockData::empty());
        container.children_ids_mut().unwrap().push("a".to_string());
        assert_eq!(container.children_ids(), &["a".to_string()]);
    }
}
