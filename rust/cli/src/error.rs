//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the error to an exit code.

use highcard_engine::errors::GameError;
use thiserror::Error;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Engine-related error
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        crate::exit_code::ERROR
    }
}
