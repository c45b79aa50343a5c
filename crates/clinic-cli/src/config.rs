//! Application configuration.
//!
//! Defaults, then an optional TOML file, then command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_CLINIC_NAME: &str = "Amigos Peludos";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Shown in the menu header and farewell
    pub clinic_name: String,
    pub prompt: PromptConfig,
}

/// Prompt behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Upper bound on re-prompts for age and pet selection
    pub max_attempts: u32,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_name: DEFAULT_CLINIC_NAME.to_string(),
            prompt: PromptConfig::default(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ClinicConfig {
    /// Load from a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> ConfigResult<Self> {
        let config: ClinicConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.clinic_name.trim().is_empty() {
            return Err(ConfigError::Invalid("clinic_name must not be empty".into()));
        }
        if self.prompt.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "prompt.max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Command-line arguments for the clinic console.
#[derive(Debug, Parser)]
#[command(name = "amigos-peludos", version, about = "Veterinary clinic record keeping")]
pub struct CliArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum attempts for prompts that re-ask on invalid input
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Build the effective configuration.
    pub fn resolve(&self) -> ConfigResult<ClinicConfig> {
        let mut config = match &self.config {
            Some(path) => ClinicConfig::from_file(path)?,
            None => ClinicConfig::default(),
        };
        if let Some(n) = self.max_attempts {
            config.prompt.max_attempts = n;
        }
        config.validate()?;
        Ok(config)
    }
}
