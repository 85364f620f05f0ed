use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailcraft_blocks::props::{
    ButtonProps, ButtonSize, ButtonStyle, DividerProps, EmailLayoutProps, TextProps,
};
use mailcraft_blocks::{
    Block, BlockData, BlockStyle, Document, FontWeight, Padding, TextAlign, ROOT_BLOCK_ID,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for email documents
    #[arg(short, long, default_value = "emails")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Mailcraft project...".bright_blue().bold()
    );

    // Create source directory if it doesn't exist
    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    // Create starter template
    let welcome_file = src_dir.join("welcome.json");
    if !welcome_file.exists() {
        fs::write(&welcome_file, welcome_document().to_json_pretty()?)?;
        println!("  {} Created welcome.json", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Config::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/welcome.json", args.src_dir);
    println!("  2. Run: mailcraft validate");
    println!("  3. Run: mailcraft render");

    Ok(())
}

/// Starter email: heading, body copy, divider and a call to action
pub fn welcome_document() -> Document {
    let mut doc = Document::new();

    doc.insert(
        ROOT_BLOCK_ID,
        Block::EmailLayout(
            BlockData::new(EmailLayoutProps::default())
                .with_children(["welcome-title", "welcome-body", "welcome-divider", "welcome-cta"]),
        ),
    );

    doc.insert(
        "welcome-title",
        Block::Text(
            BlockData::new(TextProps::new("Welcome aboard")).with_style(BlockStyle {
                font_size: Some(24),
                font_weight: Some(FontWeight::Bold),
                padding: Some(Padding::new(32, 24, 8, 24)),
                ..BlockStyle::default()
            }),
        ),
    );

    doc.insert(
        "welcome-body",
        Block::Text(
            BlockData::new(TextProps {
                text: Some("Thanks for signing up. Here is **what happens next**.".to_string()),
                markdown: Some(true),
            })
            .with_style(BlockStyle::default().with_padding(Padding::new(8, 24, 16, 24))),
        ),
    );

    doc.insert(
        "welcome-divider",
        Block::Divider(
            BlockData::new(DividerProps::default())
                .with_style(BlockStyle::default().with_padding(Padding::new(16, 24, 16, 24))),
        ),
    );

    doc.insert(
        "welcome-cta",
        Block::Button(
            BlockData::new(ButtonProps {
                text: Some("Get started".to_string()),
                url: Some("https://example.com/start".to_string()),
                button_style: Some(ButtonStyle::Rounded),
                size: Some(ButtonSize::Medium),
                ..ButtonProps::default()
            })
            .with_style(
                BlockStyle::default()
                    .with_padding(Padding::new(16, 24, 32, 24))
                    .with_text_align(TextAlign::Center),
            ),
        ),
    );

    doc
}
