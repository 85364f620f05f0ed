use super::load_document;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailcraft_blocks::{resolve, Block, ResolvedBlock};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Document file
    pub file: PathBuf,

    /// Block to start from (defaults to the configured root)
    #[arg(short, long)]
    pub root: Option<String>,
}

pub fn outline(args: OutlineArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = load_document(&args.file)?;
    let root_id = args.root.unwrap_or(config.root_block_id);

    let tree = resolve(&document, &root_id);
    if let Some(root) = &tree.root {
        let mut lines = Vec::new();
        outline_lines(root, 0, &mut lines);
        for line in lines {
            println!("{}", line);
        }
    }

    for diagnostic in &tree.diagnostics {
        println!("{} {}", "warning".yellow().bold(), diagnostic);
    }

    Ok(())
}

/// One line per block: indentation, type, id and a short summary
pub fn outline_lines(node: &ResolvedBlock, depth: usize, out: &mut Vec<String>) {
    let summary = summary(node.block);
    let mut line = format!(
        "{}{} {}",
        "  ".repeat(depth),
        node.block.block_type().to_string().bold(),
        node.id.dimmed()
    );
    if !summary.is_empty() {
        line.push_str(&format!(" \"{}\"", summary));
    }
    out.push(line);

    for child in &node.children {
        outline_lines(child, depth + 1, out);
    }
}

fn summary(block: &Block) -> String {
    let text = match block {
        Block::Text(data) => data.props_or_default().text().to_string(),
        Block::Button(data) => data.props_or_default().text.unwrap_or_default(),
        Block::Image(data) => data.props_or_default().alt.unwrap_or_default(),
        Block::Avatar(data) => data.props_or_default().alt.unwrap_or_default(),
        _ => String::new(),
    };

    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() > 40 {
        let truncated: String = first_line.chars().take(39).collect();
        format!("{}…", truncated)
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::welcome_document;

    #[test]
    fn test_outline_of_welcome() {
        colored::control::set_override(false);

        let doc = welcome_document();
        let tree = resolve(&doc, "root");
        let mut lines = Vec::new();
        outline_lines(tree.root.as_ref().unwrap(), 0, &mut lines);

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "EmailLayout root");
        assert_eq!(lines[1], "  Text welcome-title \"Welcome aboard\"");
        assert_eq!(lines[4], "  Button welcome-cta \"Get started\"");
    }
}
