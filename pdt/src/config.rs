//! Configuration module for the pdt CLI.
//!
//! Settings live in a `pdt.toml` file. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use pdc_lex::LexerConfig;
use serde::{Deserialize, Serialize};

use crate::commands::common::OutputFormat;
use crate::error::{PdtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pdt.toml";

/// Largest accepted `lexer.tab_width`.
pub const MAX_TAB_WIDTH: u32 = 64;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Settings passed to every lexer.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Token stream output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format (`json` or `text`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

fn default_format() -> String {
    OutputFormat::Json.name().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: default_parallel_jobs(),
            lexer: LexerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/pdt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PdtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| PdtError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings no command can run with.
    pub fn validate(&self) -> Result<()> {
        if self.jobs == 0 {
            return Err(PdtError::Validation("jobs must be at least 1".to_string()));
        }
        if !(1..=MAX_TAB_WIDTH).contains(&self.lexer.tab_width) {
            return Err(PdtError::Validation(format!(
                "lexer.tab_width must be between 1 and {}",
                MAX_TAB_WIDTH
            )));
        }
        if OutputFormat::from_name(&self.output.format).is_none() {
            return Err(PdtError::Config(format!(
                "Invalid format in configuration: {}",
                self.output.format
            )));
        }
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("pdt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("pdt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
