//! Error types for the console front end.

use std::path::PathBuf;

use clinic_core::ClinicError;
use thiserror::Error;

/// Failures while reading an answer from the console.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input stream closed")]
    InputClosed,

    #[error("No valid answer after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Failures inside a menu action.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Registry error: {0}")]
    Clinic(#[from] ClinicError),
}

impl From<std::io::Error> for ActionError {
    fn from(e: std::io::Error) -> Self {
        ActionError::Prompt(PromptError::Io(e))
    }
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
