//! Configuration file handling.
//!
//! Settings live in `<config dir>/cot-filter/config.toml`. Every section and
//! key is optional; anything missing falls back to the built-in persona
//! preset.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::segmenter::assemble::{DEFAULT_HEADER, DEFAULT_SEPARATOR};
use crate::segmenter::DisplayMode;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub patterns: PatternConfig,
    pub redaction: RedactionConfig,
    pub log: LogConfig,
}

/// How the filtered reply is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the thought text above the reply (debug mode)
    pub display_cot_text: bool,
    /// Heading printed above the thought text in debug mode
    pub header: String,
    /// Divider between thought and reply in debug mode
    pub separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_cot_text: false,
            header: DEFAULT_HEADER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Literals that identify thought and reply sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Phrase that introduces the final reply
    pub marker_phrase: String,
    /// Optional lead-in before the marker phrase; empty disables it
    pub marker_prefix: String,
    /// Tag names that wrap thoughts, e.g. `<内心独白>...</内心独白>`
    pub tag_names: Vec<String>,
    /// Keyword that starts an untagged thought running to the end of the text
    pub unbound_keyword: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            marker_phrase: "最终言语".to_string(),
            marker_prefix: "罗莎的".to_string(),
            tag_names: vec![
                "内心独白".to_string(),
                "无声的观察".to_string(),
                "意识流动".to_string(),
            ],
            unbound_keyword: "思索".to_string(),
        }
    }
}

/// Words stripped from the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionConfig {
    pub keywords: Vec<String>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            keywords: ["呃...", "那个...", "嗯...", "这个嘛...", "卧槽", "牛逼", "我操"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Where thoughts are archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Write thoughts to disk at all
    pub enabled: bool,
    /// Directory holding the daily log files
    pub directory: PathBuf,
    /// File name suffix after the date, e.g. `2024-05-01_<suffix>.log`
    pub file_suffix: String,
    /// Title line written with every entry
    pub entry_title: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: PathBuf::from("logs"),
            file_suffix: "rosa_thought".to_string(),
            entry_title: "罗莎的内心独白".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("cot-filter").join("config.toml"))
    }

    /// Load from the default location, or defaults if no file exists.
    #[cfg(not(tarpaulin_include))]
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Save to the default location.
    #[cfg(not(tarpaulin_include))]
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config: {:?}", path))?;
        Ok(())
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_flag(self.display.display_cot_text)
    }
}
