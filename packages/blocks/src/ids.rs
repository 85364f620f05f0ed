use crate::document::Document;
use crc32fast::Hasher;

/// Generate a short seed from a document name using CRC32
pub fn get_document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for blocks added to a document
#[derive(Debug, Clone)]
pub struct BlockIdGenerator {
    seed: String,
    count: u32,
}

impl BlockIdGenerator {
    pub fn new(document_name: &str) -> Self {
        Self {
            seed: get_document_seed(document_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("block-{}-{}", self.seed, self.count)
    }

    /// Next id not already used as a key in `document`
    pub fn new_id_for(&mut self, document: &Document) -> String {
        loop {
            let id = self.new_id();
            if !document.contains(&id) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, BlockType};

    #[test]
    fn test_same_name_same_seed() {
        assert_eq!(get_document_seed("welcome"), get_document_seed("welcome"));
        assert_ne!(get_document_seed("welcome"), get_document_seed("newsletter"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = BlockIdGenerator::from_seed("abc".to_string());
        assert_eq!(gen.new_id(), "block-abc-1");
        assert_eq!(gen.new_id(), "block-abc-2");
    }

    #[test]
    fn test_skips_ids_in_use() {
        let mut doc = Document::new();
        doc.insert("block-abc-1", Block::starter(BlockType::Spacer));

        let mut gen = BlockIdGenerator::from_seed("abc".to_string());
        assert_eq!(gen.new_id_for(&doc), "block-abc-2");
    }
}
