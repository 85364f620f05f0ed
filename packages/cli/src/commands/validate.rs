use super::{find_documents, load_document};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailcraft_blocks::{resolve, BlockRegistry, Document, ValidationError};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document file or directory (defaults to the configured source directory)
    pub path: Option<PathBuf>,
}

/// Problems found in one document
#[derive(Debug, Default, PartialEq)]
pub struct Report {
    /// Blocks failing schema validation
    pub errors: Vec<(String, ValidationError)>,

    /// Resolver diagnostics, as messages
    pub warnings: Vec<String>,

    /// Root has no children; saving would be refused
    pub empty: bool,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && !self.empty
    }
}

pub fn check_document(document: &Document, root_id: &str, registry: &BlockRegistry) -> Report {
    let mut report = Report::default();

    for (id, node) in document.iter() {
        let result = registry.validate_node(node).and_then(|block| {
            if id == root_id && !block.is_layout() {
                Err(ValidationError::RootMustBeLayout { id: id.to_string() })
            } else if id != root_id && block.is_layout() {
                Err(ValidationError::LayoutOutsideRoot { id: id.to_string() })
            } else {
                Ok(())
            }
        });
        if let Err(err) = result {
            report.errors.push((id.to_string(), err));
        }
    }

    let tree = resolve(document, root_id);
    report.warnings = tree.diagnostics.iter().map(ToString::to_string).collect();
    report.empty = document
        .block(root_id)
        .map(|root| root.children_ids().is_empty())
        .unwrap_or(true);

    report
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let registry = BlockRegistry::standard()?;
    let input = args.path.unwrap_or_else(|| config.get_src_dir(cwd));

    println!("🔍 {} Mailcraft Validator", "Starting".green().bold());
    println!("   Input: {}", input.display());
    println!();

    let files = find_documents(&input)?;
    let mut failed = 0;

    for file in &files {
        if !validate_file(file, &config.root_block_id, &registry) {
            failed += 1;
        }
    }

    println!();
    if failed == 0 {
        println!(
            "{} {} documents valid",
            "✅".green(),
            files.len()
        );
        Ok(())
    } else {
        Err(anyhow!("{} of {} documents have errors", failed, files.len()))
    }
}

fn validate_file(file: &Path, root_id: &str, registry: &BlockRegistry) -> bool {
    let document = match load_document(file) {
        Ok(document) => document,
        Err(e) => {
            println!("  {} {}", "✗".red(), e.to_string().red());
            return false;
        }
    };

    let report = check_document(&document, root_id, registry);
    let mark = if report.is_ok() { "✓".green() } else { "✗".red() };
    println!("  {} {}", mark, file.display());

    for (id, error) in &report.errors {
        println!("      {} {}: {}", "error".red().bold(), id.bright_white(), error);
    }
    for warning in &report.warnings {
        println!("      {} {}", "warning".yellow().bold(), warning);
    }
    if report.empty {
        println!(
            "      {} email has no blocks under '{}'",
            "error".red().bold(),
            root_id
        );
    }

    report.is_ok()
}
