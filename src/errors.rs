use std::io;

use gift_config::ConfigError;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::cli::core::CommandError;

/// Failures that end the shell rather than a single command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Command(#[from] CommandError),
}
