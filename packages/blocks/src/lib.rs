//! # Mailcraft Blocks
//!
//! The block document model of an email: typed blocks, the schema registry
//! that validates them, and the resolver that turns the flat id → block map
//! into a render tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: Document + BlockRegistry + resolve  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: DocumentStore, history, selection   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: editor UI tree / reader HTML      │
//! └─────────────────────────────────────────────┘
//! ```

pub mod block;
pub mod document;
pub mod error;
pub mod ids;
pub mod props;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod style;

pub use block::{Block, BlockData, BlockNode, BlockType, RawBlock};
pub use document::{Document, ROOT_BLOCK_ID};
pub use error::{DocumentError, RegistryError, Section, ValidationError};
pub use ids::BlockIdGenerator;
pub use registry::{BlockRegistry, RegistryBuilder};
pub use resolver::{resolve, Diagnostic, ResolvedBlock, ResolvedTree};
pub use schema::{BlockSchema, FieldKind, FieldSpec};
pub use style::{BlockStyle, FontFamily, FontWeight, Padding, TextAlign};
