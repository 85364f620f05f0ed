//! # Structural Mutations
//!
//! Tree edits offered by the block tune menu and the "add block" buttons.
//!
//! A mutation never touches the document directly. It is translated into a
//! [`DocumentPatch`] that upserts the affected containers (and any new
//! blocks), and that patch goes through the same propose/commit path as
//! every inspector edit, so it is validated and recorded in history.
//!
//! ## Mutation Semantics
//!
//! ### Remove
//! - Drops the id from its parent's `childrenIds`
//! - The block itself stays in the map as an unreachable, inert entry
//!
//! ### Move / Shift
//! - Fails if the target parent is missing or is not a container
//! - Fails if it would make a block its own ancestor
//! - Shifting past either end of the sibling list is a no-op
//!
//! ### Duplicate
//! - Deep copy of the subtree with fresh ids, inserted right after the original

use crate::patch::DocumentPatch;
use mailcraft_blocks::{Block, BlockIdGenerator, Document, ROOT_BLOCK_ID};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Insert a new block into a container at index (clamped)
    InsertBlock {
        parent_id: String,
        index: usize,
        block: Block,
    },

    /// Move a block to a new parent at index
    MoveBlock {
        block_id: String,
        new_parent_id: String,
        index: usize,
    },

    /// Swap a block with its previous or next sibling
    ShiftBlock {
        block_id: String,
        direction: Direction,
    },

    /// Detach a block from the tree
    RemoveBlock { block_id: String },

    /// Copy a block and its descendants next to the original
    DuplicateBlock { block_id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Block '{0}' cannot have children")]
    NotAContainer(String),

    #[error("Block '{0}' is not attached to the tree")]
    Detached(String),

    #[error("The root block cannot be moved, removed or duplicated")]
    RootIsFixed,

    #[error("Would create cycle")]
    CycleDetected,
}

/// Patch produced by a mutation, plus the id of the block it created
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMutation {
    pub patch: DocumentPatch,
    pub created: Option<String>,
}

/// Outcome of a committed mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Store version after the commit
    pub version: u64,

    /// Id of a block the mutation created, if any
    pub created: Option<String>,
}

impl Mutation {
    /// Translate into a patch against `doc`. An empty patch means the
    /// mutation has nothing to do.
    pub fn plan(
        &self,
        doc: &Document,
        ids: &mut BlockIdGenerator,
    ) -> Result<PlannedMutation, MutationError> {
        match self {
            Mutation::InsertBlock {
                parent_id,
                index,
                block,
            } => Self::plan_insert(doc, ids, parent_id, *index, block),

            Mutation::MoveBlock {
                block_id,
                new_parent_id,
                index,
            } => Self::plan_move(doc, block_id, new_parent_id, *index),

            Mutation::ShiftBlock {
                block_id,
                direction,
            } => Self::plan_shift(doc, block_id, *direction),

            Mutation::RemoveBlock { block_id } => Self::plan_remove(doc, block_id),

            Mutation::DuplicateBlock { block_id } => Self::plan_duplicate(doc, ids, block_id),
        }
    }

    fn container(doc: &Document, id: &str) -> Result<Block, MutationError> {
        let block = doc
            .block(id)
            .ok_or_else(|| MutationError::ParentNotFound(id.to_string()))?;
        if !block.block_type().accepts_children() {
            return Err(MutationError::NotAContainer(id.to_string()));
        }
        Ok(block.clone())
    }

    fn attached(doc: &Document, block_id: &str) -> Result<(String, usize), MutationError> {
        if block_id == ROOT_BLOCK_ID {
            return Err(MutationError::RootIsFixed);
        }
        if !doc.contains(block_id) {
            return Err(MutationError::BlockNotFound(block_id.to_string()));
        }
        doc.find_parent(block_id)
            .map(|(parent, index)| (parent.to_string(), index))
            .ok_or_else(|| MutationError::Detached(block_id.to_string()))
    }

    fn children_mut<'b>(block: &'b mut Block, id: &str) -> Result<&'b mut Vec<String>, MutationError> {
        block
            .children_ids_mut()
            .ok_or_else(|| MutationError::NotAContainer(id.to_string()))
    }

    fn plan_insert(
        doc: &Document,
        ids: &mut BlockIdGenerator,
        parent_id: &str,
        index: usize,
        block: &Block,
    ) -> Result<PlannedMutation, MutationError> {
        let mut parent = Self::container(doc, parent_id)?;
        let new_id = ids.new_id_for(doc);

        let children = Self::children_mut(&mut parent, parent_id)?;
        let insert_index = index.min(children.len());
        children.insert(insert_index, new_id.clone());

        let patch = DocumentPatch::new()
            .upsert(parent_id, parent)
            .upsert(new_id.clone(), block.clone());

        Ok(PlannedMutation {
            patch,
            created: Some(new_id),
        })
    }

    fn plan_move(
        doc: &Document,
        block_id: &str,
        new_parent_id: &str,
        index: usize,
    ) -> Result<PlannedMutation, MutationError> {
        let (old_parent_id, old_index) = Self::attached(doc, block_id)?;
        let mut new_parent = Self::container(doc, new_parent_id)?;

        if block_id == new_parent_id || Self::is_descendant(doc, block_id, new_parent_id) {
            return Err(MutationError::CycleDetected);
        }

        let patch = if old_parent_id == new_parent_id {
            let children = Self::children_mut(&mut new_parent, new_parent_id)?;
            children.remove(old_index);
            let insert_index = index.min(children.len());
            children.insert(insert_index, block_id.to_string());
            DocumentPatch::new().upsert(new_parent_id, new_parent)
        } else {
            let mut old_parent = Self::container(doc, &old_parent_id)?;
            Self::children_mut(&mut old_parent, &old_parent_id)?.remove(old_index);

            let children = Self::children_mut(&mut new_parent, new_parent_id)?;
            let insert_index = index.min(children.len());
            children.insert(insert_index, block_id.to_string());

            DocumentPatch::new()
                .upsert(old_parent_id, old_parent)
                .upsert(new_parent_id, new_parent)
        };

        Ok(PlannedMutation {
            patch,
            created: None,
        })
    }

    fn plan_shift(
        doc: &Document,
        block_id: &str,
        direction: Direction,
    ) -> Result<PlannedMutation, MutationError> {
        let (parent_id, index) = Self::attached(doc, block_id)?;
        let mut parent = Self::container(doc, &parent_id)?;
        let children = Self::children_mut(&mut parent, &parent_id)?;

        let target = match direction {
            Direction::Up if index > 0 => Some(index - 1),
            Direction::Down if index + 1 < children.len() => Some(index + 1),
            _ => None,
        };

        let patch = match target {
            Some(target) => {
                children.swap(index, target);
                DocumentPatch::new().upsert(parent_id, parent)
            }
            None => DocumentPatch::new(),
        };

        Ok(PlannedMutation {
            patch,
            created: None,
        })
    }

    fn plan_remove(doc: &Document, block_id: &str) -> Result<PlannedMutation, MutationError> {
        let (parent_id, index) = Self::attached(doc, block_id)?;
        let mut parent = Self::container(doc, &parent_id)?;
        Self::children_mut(&mut parent, &parent_id)?.remove(index);

        Ok(PlannedMutation {
            patch: DocumentPatch::new().upsert(parent_id, parent),
            created: None,
        })
    }

    fn plan_duplicate(
        doc: &Document,
        ids: &mut BlockIdGenerator,
        block_id: &str,
    ) -> Result<PlannedMutation, MutationError> {
        let (parent_id, index) = Self::attached(doc, block_id)?;
        let mut parent = Self::container(doc, &parent_id)?;

        let mut copies = Vec::new();
        let mut path = Vec::new();
        let copy_id = Self::copy_subtree(doc, ids, block_id, &mut path, &mut copies)?;

        Self::children_mut(&mut parent, &parent_id)?.insert(index + 1, copy_id.clone());

        let mut patch = DocumentPatch::new().upsert(parent_id, parent);
        for (id, block) in copies {
            patch.insert(id, block);
        }

        Ok(PlannedMutation {
            patch,
            created: Some(copy_id),
        })
    }

    /// Copy `id` and its descendants under fresh ids; returns the new id.
    /// Missing or unrecognized descendants are dropped from the copy.
    fn copy_subtree(
        doc: &Document,
        ids: &mut BlockIdGenerator,
        id: &str,
        path: &mut Vec<String>,
        copies: &mut Vec<(String, Block)>,
    ) -> Result<String, MutationError> {
        if path.iter().any(|ancestor| ancestor == id) {
            return Err(MutationError::CycleDetected);
        }

        let mut block = doc
            .block(id)
            .cloned()
            .ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;

        let new_id = loop {
            let candidate = ids.new_id_for(doc);
            if !copies.iter().any(|(taken, _)| *taken == candidate) {
                break candidate;
            }
        };

        path.push(id.to_string());
        let mut new_children = Vec::new();
        for child_id in block.children_ids().to_vec() {
            if doc.block(&child_id).is_some() {
                new_children.push(Self::copy_subtree(doc, ids, &child_id, path, copies)?);
            }
        }
        path.pop();

        if let Some(children) = block.children_ids_mut() {
            *children = new_children;
        }
        copies.push((new_id.clone(), block));
        Ok(new_id)
    }

    /// True if `candidate` sits somewhere below `ancestor`
    fn is_descendant(doc: &Document, ancestor: &str, candidate: &str) -> bool {
        let mut stack: Vec<&str> = vec![ancestor];
        let mut seen = std::collections::HashSet::new();

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(block) = doc.block(id) {
                for child in block.children_ids() {
                    if child == candidate {
                        return true;
                    }
                    stack.push(child);
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailcraft_blocks::BlockType;
    use serde_json::json;

    fn doc() -> Document {
        serde_json::from_value(json!({
            "root": {"type": "EmailLayout", "data": {"childrenIds": ["a", "c"]}},
            "a": {"type": "Text", "data": {"props": {"text": "a"}}},
            "c": {"type": "Container", "data": {"childrenIds": ["b"]}},
            "b": {"type": "Text", "data": {"props": {"text": "b"}}}
        }))
        .unwrap()
    }

    fn ids() -> BlockIdGenerator {
        BlockIdGenerator::from_seed("t".to_string())
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::ShiftBlock {
            block_id: "a".to_string(),
            direction: Direction::Down,
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_shift_at_boundary_is_empty() {
        let planned = Mutation::ShiftBlock {
            block_id: "a".to_string(),
            direction: Direction::Up,
        }
        .plan(&doc(), &mut ids())
        .unwrap();
        assert!(planned.patch.is_empty());
    }

    #[test]
    fn test_insert_generates_id() {
        let planned = Mutation::InsertBlock {
            parent_id: "c".to_string(),
            index: 99,
            block: Block::starter(BlockType::Spacer),
        }
        .plan(&doc(), &mut ids())
        .unwrap();
        assert_eq!(planned.created.as_deref(), Some("block-t-1"));
        assert_eq!(planned.patch.len(), 2);
    }

    #[test]
    fn test_insert_into_leaf_rejected() {
        let err = Mutation::InsertBlock {
            parent_id: "a".to_string(),
            index: 0,
            block: Block::starter(BlockType::Spacer),
        }
        .plan(&doc(), &mut ids())
        .unwrap_err();
        assert_eq!(err, MutationError::NotAContainer("a".to_string()));
    }

    #[test]
    fn test_move_into_own_descendant_rejected() {
        let err = Mutation::MoveBlock {
            block_id: "c".to_string(),
            new_parent_id: "c".to_string(),
            index: 0,
        }
        .plan(&doc(), &mut ids())
        .unwrap_err();
        assert_eq!(err, MutationError::CycleDetected);
    }

    #[test]
    fn test_root_is_fixed() {
        let err = Mutation::RemoveBlock {
            block_id: ROOT_BLOCK_ID.to_string(),
        }
        .plan(&doc(), &mut ids())
        .unwrap_err();
        assert_eq!(err, MutationError::RootIsFixed);
    }

    #[test]
    fn test_duplicate_copies_subtree() {
        let planned = Mutation::DuplicateBlock {
            block_id: "c".to_string(),
        }
        .plan(&doc(), &mut ids())
        .unwrap();

        // parent + copied container + copied text
        assert_eq!(planned.patch.len(), 3);
        assert!(planned.created.is_some());
    }
}
