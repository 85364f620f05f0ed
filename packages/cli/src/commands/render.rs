use super::{find_documents, load_document};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailcraft_blocks::BlockRegistry;
use mailcraft_renderer::{export_html, ReaderOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Document file or directory (defaults to the configured source directory)
    pub path: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Pretty print HTML (overrides config)
    #[arg(long)]
    pub pretty: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let registry = BlockRegistry::standard()?;

    let input = args
        .path
        .clone()
        .unwrap_or_else(|| config.get_src_dir(cwd));
    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };

    let files = find_documents(&input)?;
    if files.is_empty() {
        println!("{}", "⚠️  No documents found".yellow());
        return Ok(());
    }

    if !args.stdout {
        println!("{}", "🔨 Rendering emails...".bright_blue().bold());
        println!("Found {} documents", files.len());
    }

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &files {
        let relative_path = match file.strip_prefix(&input) {
            Ok(path) if !path.as_os_str().is_empty() => path,
            _ => file.file_name().map(Path::new).unwrap_or(file),
        };

        match render_file(file, &args, &config, &registry) {
            Ok(html) if args.stdout => {
                success_count += 1;
                println!("{}", html);
            }
            Ok(html) => {
                let output_path = out_dir.join(relative_path).with_extension("html");
                write_output(&output_path, &html)?;
                success_count += 1;
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path.display()
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    if error_count > 0 {
        return Err(anyhow!(
            "{} of {} documents failed to render",
            error_count,
            files.len()
        ));
    }

    if !args.stdout {
        println!();
        println!(
            "{} Rendered {} emails successfully",
            "✅".green(),
            success_count
        );
    }

    Ok(())
}

fn render_file(
    file: &Path,
    args: &RenderArgs,
    config: &Config,
    registry: &BlockRegistry,
) -> Result<String> {
    let document = load_document(file)?;
    debug!(path = %file.display(), blocks = document.len(), "loaded document");

    let mut options = ReaderOptions {
        pretty: args.pretty || config.pretty,
        ..ReaderOptions::default()
    };
    if let Some(stem) = file.file_stem().and_then(|s| s.to_str()) {
        options = options.with_title(stem);
    }

    Ok(export_html(
        &document,
        &config.root_block_id,
        registry,
        &options,
    )?)
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}
