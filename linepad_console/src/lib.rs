//! # Linepad Console
//!
//! Interactive shell around `linepad_core`.
//!
//! ## Philosophy
//!
//! - **Thin shell**: Reads a command token, collects any text it needs,
//!   calls exactly one core operation and prints the framed view
//! - **Transport-agnostic**: Sessions run over any `BufRead`/`Write` pair,
//!   so scripted input drives the same code path as a terminal
//! - **No editing logic**: Buffer, cursor and history live in the core
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A full-screen terminal UI
//! - A file editor (nothing is loaded or saved)

pub mod commands;
pub mod config;
pub mod session;

use std::path::Path;

use thiserror::Error;

pub use commands::{CommandError, CommandParser, ShellCommand};
pub use config::{ConfigError, ConsoleConfig};
pub use session::{Session, SessionState};

/// Console error
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Console result
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Load the console config from `path`, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> ConsoleResult<ConsoleConfig> {
    match path {
        Some(path) => Ok(ConsoleConfig::load(path)?),
        None => Ok(ConsoleConfig::default()),
    }
}
