//! # Tree Resolver
//!
//! Walks `childrenIds` edges from a root block and produces the tree both
//! renderer sets consume. Malformed parts of a document never abort the
//! walk: missing children, unknown block types, undecodable data and cycles
//! are recorded as [`Diagnostic`]s, logged, and skipped.

use crate::block::{Block, BlockNode, BlockType};
use crate::document::Document;
use std::fmt;
use tracing::warn;

/// One resolved block and its resolved children, in `childrenIds` order
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBlock<'a> {
    pub id: &'a str,
    pub block: &'a Block,
    pub children: Vec<ResolvedBlock<'a>>,
}

impl<'a> ResolvedBlock<'a> {
    fn walk(&self, out: &mut Vec<(&'a str, &'a Block)>) {
        out.push((self.id, self.block));
        for child in &self.children {
            child.walk(out);
        }
    }

    pub fn find(&self, id: &str) -> Option<&ResolvedBlock<'a>> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Something the resolver skipped
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    MissingRoot { id: String },
    MissingBlock { parent: String, id: String },
    UnknownBlockType { id: String, block_type: String },
    InvalidBlock { id: String, block_type: BlockType },
    Cycle { id: String, path: Vec<String> },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingRoot { id } => write!(f, "root block '{}' not found", id),
            Diagnostic::MissingBlock { parent, id } => {
                write!(f, "block '{}' lists missing child '{}'", parent, id)
            }
            Diagnostic::UnknownBlockType { id, block_type } => {
                write!(f, "block '{}' has unknown type '{}'", id, block_type)
            }
            Diagnostic::InvalidBlock { id, block_type } => {
                write!(f, "block '{}' has malformed {} data", id, block_type)
            }
            Diagnostic::Cycle { id, path } => write!(
                f,
                "block '{}' is its own ancestor: {} → {}",
                id,
                path.join(" → "),
                id
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTree<'a> {
    pub root: Option<ResolvedBlock<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ResolvedTree<'a> {
    /// Depth-first render order
    pub fn order(&self) -> Vec<(&'a str, &'a Block)> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            root.walk(&mut out);
        }
        out
    }

    pub fn find(&self, id: &str) -> Option<&ResolvedBlock<'a>> {
        self.root.as_ref().and_then(|root| root.find(id))
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Resolve the tree below `root_id`
pub fn resolve<'a>(document: &'a Document, root_id: &str) -> ResolvedTree<'a> {
    let mut resolver = Resolver {
        document,
        path: Vec::new(),
        diagnostics: Vec::new(),
    };

    let root = match document.get_key_value(root_id) {
        Some((id, node)) => resolver.visit(id, node),
        None => {
            resolver.report(Diagnostic::MissingRoot {
                id: root_id.to_string(),
            });
            None
        }
    };

    ResolvedTree {
        root,
        diagnostics: resolver.diagnostics,
    }
}

struct Resolver<'a> {
    document: &'a Document,
    /// Ancestors of the block being visited
    path: Vec<&'a str>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Resolver<'a> {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn visit(&mut self, id: &'a str, node: &'a BlockNode) -> Option<ResolvedBlock<'a>> {
        let block = match node {
            BlockNode::Block(block) => block,
            BlockNode::Unrecognized(raw) => {
                let diagnostic = match raw.block_type.parse::<BlockType>() {
                    Ok(block_type) => Diagnostic::InvalidBlock {
                        id: id.to_string(),
                        block_type,
                    },
                    Err(_) => Diagnostic::UnknownBlockType {
                        id: id.to_string(),
                        block_type: raw.block_type.clone(),
                    },
                };
                self.report(diagnostic);
                return None;
            }
        };

        self.path.push(id);
        let mut children = Vec::with_capacity(block.children_ids().len());

        for child_id in block.children_ids() {
            if self.path.contains(&child_id.as_str()) {
                let path = self.path.iter().map(|s| s.to_string()).collect();
                self.report(Diagnostic::Cycle {
                    id: child_id.clone(),
                    path,
                });
                continue;
            }

            match self.document.get_key_value(child_id) {
                Some((key, child)) => {
                    if let Some(resolved) = self.visit(key, child) {
                        children.push(resolved);
                    }
                }
                None => self.report(Diagnostic::MissingBlock {
                    parent: id.to_string(),
                    id: child_id.clone(),
                }),
            }
        }

        self.path.pop();

        Some(ResolvedBlock {
            id,
            block,
            children,
        })
    }
}
