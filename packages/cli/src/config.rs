use mailcraft_blocks::ROOT_BLOCK_ID;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "mailcraft.config.json";

/// Mailcraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing document .json files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Directory rendered .html files are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Id of the EmailLayout block to render from
    #[serde(default = "default_root_block_id")]
    pub root_block_id: String,

    /// Pretty print rendered HTML
    #[serde(default)]
    pub pretty: bool,
}

fn default_src_dir() -> String {
    "emails".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_root_block_id() -> String {
    ROOT_BLOCK_ID.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            root_block_id: default_root_block_id(),
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "srcDir": "templates",
            "outDir": "build",
            "rootBlockId": "layout",
            "pretty": true
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.src_dir, "templates");
        assert_eq!(config.out_dir, "build");
        assert_eq!(config.root_block_id, "layout");
        assert!(config.pretty);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
        assert_eq!(config.src_dir, "emails");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.root_block_id, "root");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.src_dir, "emails");
        assert!(!config.pretty);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("/nonexistent/mailcraft/dir").unwrap();
        assert_eq!(config, Config::default());
    }
}
