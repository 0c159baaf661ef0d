//! Configuration management for PromptDeck CLI
//!
//! Stores the server URL and view defaults in ~/.config/promptdeck/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use promptdeck::{Category, ViewConfig, FEEDBACK_DURATION};

const CONFIG_DIR: &str = "promptdeck";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Category selected when none is given on the command line
    #[serde(default)]
    pub default_category: Category,
    /// How long "Copied!" stays on a card, in milliseconds
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_feedback_ms() -> u64 {
    FEEDBACK_DURATION.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_category: Category::All,
            feedback_ms: default_feedback_ms(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            feedback_duration: Duration::from_millis(self.feedback_ms),
        }
    }
}
