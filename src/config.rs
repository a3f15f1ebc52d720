//! baseline-scanner configuration management.
//!
//! Configuration is read from:
//! - Linux: ~/.config/baseline-scanner/config.toml
//! - macOS: ~/Library/Application Support/baseline-scanner/config.toml
//! - Windows: %APPDATA%\baseline-scanner\config.toml
//!
//! A missing file yields defaults. `OPENAI_API_KEY` and
//! `BASELINE_SCANNER_DATASET` override the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScanError};

/// Environment variable holding the suggestion provider credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable pointing at a web-features dataset file
pub const DATASET_ENV: &str = "BASELINE_SCANNER_DATASET";

/// Scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScannerConfig {
    /// Knowledge base settings
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,

    /// Suggestion provider settings
    #[serde(default)]
    pub suggestions: SuggestionConfig,

    /// File selection settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Knowledge base configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KnowledgeBaseConfig {
    /// web-features JSON replacing the embedded sample
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
}

/// Suggestion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Bearer token; without one only static suggestions are used
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completion API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on one provider call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.3
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl SuggestionConfig {
    /// Configured, non-blank credential
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// File selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extensions scanned when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names never descended into
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "mjs", "cjs", "ts", "tsx", "html", "htm"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", "dist", "build", ".git"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

impl ScanConfig {
    /// Whether `ext` is one of the configured scan extensions
    pub fn should_scan_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ScannerConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("baseline-scanner").join("config.toml"))
    }

    /// Load from `path` (or the default location), then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => Self::load_from(&p)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;

        toml::from_str(&content).map_err(|e| ScanError::ConfigError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.suggestions.api_key = Some(key);
            }
        }
        if let Ok(dataset) = std::env::var(DATASET_ENV) {
            if !dataset.trim().is_empty() {
                self.knowledge_base.dataset_path = Some(PathBuf::from(dataset));
            }
        }
    }
}
