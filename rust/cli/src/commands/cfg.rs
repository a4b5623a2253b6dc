//! Configuration command handler.
//!
//! Displays the resolved configuration as JSON, each value paired with its
//! source (default, file, or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_balance": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Loads the configuration with source tracking and prints it as JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    render(&resolved, out)
}

fn render(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "bet": {
            "value": config.bet,
            "source": sources.bet,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "tie_rule": {
            "value": config.tie_rule,
            "source": sources.tie_rule,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
