//! # Email Document
//!
//! A document is a flat map from block id to block node. The tree shape
//! comes from the `childrenIds` edges, starting at the block keyed
//! [`ROOT_BLOCK_ID`].
//!
//! The JSON form is the map itself, so export and import are plain
//! serde_json round trips:
//!
//! ```json
//! {
//!   "root": { "type": "EmailLayout", "data": { "childrenIds": ["b1"] } },
//!   "b1":   { "type": "Text", "data": { "props": { "text": "hi" } } }
//! }
//! ```

use crate::block::{Block, BlockNode};
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id of the EmailLayout block every document is rendered from
pub const ROOT_BLOCK_ID: &str = "root";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    blocks: BTreeMap<String, BlockNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding only an empty root layout
    pub fn with_empty_layout() -> Self {
        let mut doc = Self::new();
        doc.insert(
            ROOT_BLOCK_ID,
            Block::starter(crate::block::BlockType::EmailLayout),
        );
        doc
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, id: &str) -> Option<&BlockNode> {
        self.blocks.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut BlockNode> {
        self.blocks.get_mut(id)
    }

    /// Typed block for `id`, if present and recognized
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id).and_then(BlockNode::as_block)
    }

    pub(crate) fn get_key_value(&self, id: &str) -> Option<(&String, &BlockNode)> {
        self.blocks.get_key_value(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, node: impl Into<BlockNode>) -> Option<BlockNode> {
        self.blocks.insert(id.into(), node.into())
    }

    pub fn remove(&mut self, id: &str) -> Option<BlockNode> {
        self.blocks.remove(id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BlockNode)> {
        self.blocks.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// Upsert every block of `blocks` by id. Existing blocks with the same id
    /// are replaced whole; nothing below the top-level key is merged.
    pub fn merge<I>(&mut self, blocks: I)
    where
        I: IntoIterator<Item = (String, BlockNode)>,
    {
        self.blocks.extend(blocks);
    }

    /// Parent id and position of the first container listing `id` as a child
    pub fn find_parent(&self, id: &str) -> Option<(&str, usize)> {
        self.blocks.iter().find_map(|(parent_id, node)| {
            node.as_block()
                .and_then(|block| block.children_ids().iter().position(|child| child == id))
                .map(|index| (parent_id.as_str(), index))
        })
    }

    /// True when the root layout is missing or has no children.
    ///
    /// Saving such a document is refused by the save flow.
    pub fn is_blank(&self) -> bool {
        self.block(ROOT_BLOCK_ID)
            .map(|root| root.children_ids().is_empty())
            .unwrap_or(true)
    }
}

impl FromIterator<(String, BlockNode)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, BlockNode)>>(iter: T) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
