//! # Block Registry
//!
//! Process-wide, read-only map from block type to its schema. Built once at
//! startup; a block type without a schema fails the build instead of
//! surfacing later at render time.
//!
//! ```rust,ignore
//! let registry = Arc::new(BlockRegistry::standard()?);
//! let block = registry.validate("Text", &json!({"props": {"text": "hi"}}))?;
//! ```

use crate::block::{Block, BlockNode, BlockType};
use crate::error::{RegistryError, ValidationError};
use crate::schema::{builtin_schemas, BlockSchema};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct BlockRegistry {
    schemas: HashMap<BlockType, BlockSchema>,
}

impl BlockRegistry {
    /// Registry with the schema of every built-in block type
    pub fn standard() -> Result<Self, RegistryError> {
        builtin_schemas()
            .into_iter()
            .fold(Self::builder(), RegistryBuilder::register)
            .build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Schema for `block_type`. Every type is present once the registry is built.
    pub fn resolve(&self, block_type: BlockType) -> &BlockSchema {
        &self.schemas[&block_type]
    }

    /// Schema for a type tag as written in a document
    pub fn lookup(&self, type_name: &str) -> Option<&BlockSchema> {
        type_name
            .parse::<BlockType>()
            .ok()
            .map(|block_type| self.resolve(block_type))
    }

    pub fn validate(&self, type_name: &str, data: &Value) -> Result<Block, ValidationError> {
        self.lookup(type_name)
            .ok_or_else(|| ValidationError::UnknownBlockType(type_name.to_string()))?
            .validate(data)
    }

    /// Validate a node from a document or patch, typed or not
    pub fn validate_node(&self, node: &BlockNode) -> Result<Block, ValidationError> {
        let block = self.validate(node.type_name(), &node.data_value())?;
        match node.unknown_key() {
            Some(key) => Err(ValidationError::Malformed {
                block_type: block.block_type(),
                message: format!("unknown key `{}` in block", key),
            }),
            None => Ok(block),
        }
    }

    pub fn check(&self, block: &Block) -> Result<(), ValidationError> {
        self.resolve(block.block_type()).check(block)
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    schemas: Vec<BlockSchema>,
}

impl RegistryBuilder {
    pub fn register(mut self, schema: BlockSchema) -> Self {
        self.schemas.push(schema);
        self
    }

    pub fn build(self) -> Result<BlockRegistry, RegistryError> {
        let mut schemas = HashMap::new();
        for schema in self.schemas {
            let block_type = schema.block_type;
            if schemas.insert(block_type, schema).is_some() {
                return Err(RegistryError::DuplicateSchema(block_type));
            }
        }

        if let Some(missing) = BlockType::ALL
            .iter()
            .find(|block_type| !schemas.contains_key(*block_type))
        {
            return Err(RegistryError::MissingSchema(*missing));
        }

        tracing::debug!("Block registry built with {} schemas", schemas.len());
        Ok(BlockRegistry { schemas })
    }
}
