//! Interactive console front end for the clinic records.
//!
//! The menu loop in [`menu`] drives the actions in [`actions`] over a
//! [`Console`], which is generic over its reader and writer so sessions can be
//! scripted in tests.

pub mod actions;
pub mod config;
pub mod console;
pub mod error;
pub mod evens;
pub mod logger;
pub mod menu;

pub use config::{CliArgs, ClinicConfig, PromptConfig};
pub use console::Console;
pub use error::{ActionError, ActionResult, ConfigError, PromptError, PromptResult};
pub use menu::{ClinicApp, MenuChoice, MenuState};
