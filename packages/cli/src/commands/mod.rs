pub mod init;
pub mod outline;
pub mod render;
pub mod validate;

pub use init::{init, InitArgs};
pub use outline::{outline, OutlineArgs};
pub use render::{render, RenderArgs};
pub use validate::{validate, ValidateArgs};

use crate::config::DEFAULT_CONFIG_NAME;
use anyhow::{anyhow, Result};
use mailcraft_blocks::Document;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file, or every .json file below a directory
pub(crate) fn find_documents(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .filter(|path| path.file_name().and_then(|s| s.to_str()) != Some(DEFAULT_CONFIG_NAME))
        .collect();
    files.sort();

    Ok(files)
}

pub(crate) fn load_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    Document::from_json(&source).map_err(|e| anyhow!("{}: {}", path.display(), e))
}
