//! Error types for the block model

use crate::block::BlockType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where in a block's `data` a field lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Props,
    Style,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Props => f.write_str("props"),
            Section::Style => f.write_str("style"),
        }
    }
}

/// Why a block's data was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("{block_type}: `{section}` must be an object")]
    NotAnObject {
        block_type: BlockType,
        section: &'static str,
    },

    #[error("{block_type}: unknown field `{section}.{field}`")]
    UnknownField {
        block_type: BlockType,
        section: Section,
        field: String,
    },

    #[error("{block_type}: invalid value for `{section}.{field}`, expected {expected}")]
    InvalidValue {
        block_type: BlockType,
        section: Section,
        field: String,
        expected: String,
    },

    #[error("{0} blocks cannot have children")]
    ChildrenNotAllowed(BlockType),

    #[error("{block_type}: `childrenIds` must be an array of block ids")]
    InvalidChildren { block_type: BlockType },

    #[error("{block_type}: {message}")]
    Malformed {
        block_type: BlockType,
        message: String,
    },

    #[error("Block '{id}' must be an EmailLayout")]
    RootMustBeLayout { id: String },

    #[error("EmailLayout is only allowed as the root block, found at '{id}'")]
    LayoutOutsideRoot { id: String },
}

/// Registry misconfiguration, detected once at startup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("No schema registered for block type {0}")]
    MissingSchema(BlockType),

    #[error("Block type {0} registered twice")]
    DuplicateSchema(BlockType),
}
