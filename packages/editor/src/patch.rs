//! # Document Patches
//!
//! Edits reach the store in two steps:
//!
//! 1. [`ValidatedPatch::propose`] checks every block of a [`DocumentPatch`]
//!    against the registry and the root invariants.
//! 2. [`DocumentStore::set_document`](crate::DocumentStore::set_document)
//!    commits the validated patch.
//!
//! `ValidatedPatch` has no public constructor besides `propose`, so an
//! unchecked patch cannot reach the store.

use mailcraft_blocks::{
    Block, BlockNode, BlockRegistry, DocumentError, ValidationError, ROOT_BLOCK_ID,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Blocks to upsert by id, as produced by the inspector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentPatch {
    blocks: BTreeMap<String, BlockNode>,
}

impl DocumentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a block to the patch, builder style
    pub fn upsert(mut self, id: impl Into<String>, node: impl Into<BlockNode>) -> Self {
        self.insert(id, node);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, node: impl Into<BlockNode>) {
        self.blocks.insert(id.into(), node.into());
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A patch whose every block passed schema validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPatch {
    blocks: BTreeMap<String, Block>,
}

impl ValidatedPatch {
    pub fn propose(
        registry: &BlockRegistry,
        patch: DocumentPatch,
    ) -> Result<Self, ValidationError> {
        let mut blocks = BTreeMap::new();

        for (id, node) in patch.blocks {
            let block = registry.validate_node(&node)?;

            if id == ROOT_BLOCK_ID && !block.is_layout() {
                return Err(ValidationError::RootMustBeLayout { id });
            }
            if id != ROOT_BLOCK_ID && block.is_layout() {
                return Err(ValidationError::LayoutOutsideRoot { id });
            }

            blocks.insert(id, block);
        }

        Ok(Self { blocks })
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The id touched by this patch, when it touches exactly one block
    pub fn single_block_id(&self) -> Option<&str> {
        if self.blocks.len() == 1 {
            self.blocks.keys().next().map(String::as_str)
        } else {
            None
        }
    }

    pub(crate) fn into_nodes(self) -> impl Iterator<Item = (String, BlockNode)> {
        self.blocks
            .into_iter()
            .map(|(id, block)| (id, BlockNode::Block(block)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_blocks::{BlockType, Section};
    use serde_json::json;

    fn registry() -> BlockRegistry {
        BlockRegistry::standard().unwrap()
    }

    #[test]
    fn test_propose_valid_patch() {
        let patch = DocumentPatch::from_json(
            r#"{"b1": {"type": "Text", "data": {"props": {"text": "bye"}}}}"#,
        )
        .unwrap();

        let validated = ValidatedPatch::propose(&registry(), patch).unwrap();
        assert_eq!(validated.single_block_id(), Some("b1"));
        assert_eq!(
            validated.get("b1").map(Block::block_type),
            Some(BlockType::Text)
        );
    }

    #[test]
    fn test_propose_rejects_invalid_props() {
        let patch: DocumentPatch = serde_json::from_value(json!({
            "b1": {"type": "Button", "data": {"props": {"buttonTextColor": "white"}}}
        }))
        .unwrap();

        let err = ValidatedPatch::propose(&registry(), patch).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_propose_rejects_unknown_prop() {
        let patch = DocumentPatch::from_json(
            r#"{"b1": {"type": "Text", "data": {"props": {"text": "x", "bogus": 1}}}}"#,
        )
        .unwrap();

        let err = ValidatedPatch::propose(&registry(), patch).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                block_type: BlockType::Text,
                section: Section::Props,
                field: "bogus".to_string(),
            }
        );
    }

    #[test]
    fn test_propose_rejects_unknown_data_key() {
        let patch = DocumentPatch::from_json(
            r#"{"b1": {"type": "Text", "data": {"props": {"text": "x"}, "extra": true}}}"#,
        )
        .unwrap();

        let err = ValidatedPatch::propose(&registry(), patch).unwrap_err();
        assert!(matches!(err, ValidationError::Malformed { block_type: BlockType::Text, .. }));
    }

    #[test]
    fn test_propose_rejects_unknown_padding_side() {
        let patch: DocumentPatch = serde_json::from_value(json!({
            "b1": {"type": "Text", "data": {"style": {
                "padding": {"top": 1, "bottom": 1, "left": 1, "right": 1, "inner": 2}
            }}}
        }))
        .unwrap();

        let err = ValidatedPatch::propose(&registry(), patch).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidValue { section: Section::Style, ref field, .. } if field == "padding"
        ));
    }

    #[test]
    fn test_propose_rejects_unknown_type() {
        let patch: DocumentPatch =
            serde_json::from_value(json!({"b1": {"type": "Heading", "data": {}}})).unwrap();

        let err = ValidatedPatch::propose(&registry(), patch).unwrap_err();
        assert_eq!(err, ValidationError::UnknownBlockType("Heading".to_string()));
    }

    #[test]
    fn test_root_invariants() {
        let not_layout = DocumentPatch::new().upsert(ROOT_BLOCK_ID, Block::starter(BlockType::Text));
        assert!(matches!(
            ValidatedPatch::propose(&registry(), not_layout),
            Err(ValidationError::RootMustBeLayout { .. })
        ));

        let stray_layout = DocumentPatch::new().upsert("b2", Block::starter(BlockType::EmailLayout));
        assert!(matches!(
            ValidatedPatch::propose(&registry(), stray_layout),
            Err(ValidationError::LayoutOutsideRoot { .. })
        ));
    }
}
