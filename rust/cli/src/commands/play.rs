//! # Play Command
//!
//! Plays a session of wagered high-card rounds against the house.
//!
//! Settings resolve through the usual layers (defaults, config file,
//! environment) with command-line flags applied last. The session stops early,
//! with a warning, once the balance can no longer cover the bet. Finished
//! rounds can be appended to a JSONL round log for `stats`.

use crate::config::{self, Config, Overrides};
use crate::error::CliError;
use crate::formatters::format_outcome;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use highcard_engine::engine::RoundEngine;
use highcard_engine::errors::GameError;
use highcard_engine::logger::{RoundLogger, RoundRecord, SessionSummary};
use highcard_engine::rng::next_seed;
use highcard_engine::rules::TieRule;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Arguments of the `play` subcommand.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub rounds: u32,
    pub bet: Option<u64>,
    pub seed: Option<u64>,
    pub balance: Option<u64>,
    pub tie_rule: Option<TieRule>,
    pub output: Option<PathBuf>,
}

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` on completion, including sessions cut short by the balance
/// * `Err(CliError)` on invalid configuration, engine failures, or I/O errors
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut resolved = config::load_with_sources()?;
    resolved.apply(Overrides {
        starting_balance: args.balance,
        bet: args.bet,
        seed: args.seed,
        tie_rule: args.tie_rule,
    })?;
    play_session(&resolved.config, args.rounds, args.output, out, err)
}

fn play_session(
    cfg: &Config,
    rounds: u32,
    output: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let seed = cfg.seed.unwrap_or_else(next_seed);
    let mut engine =
        RoundEngine::with_seed(seed, cfg.starting_balance).with_tie_rule(cfg.tie_rule);

    let mut logger = match &output {
        Some(path) => {
            ensure_parent_dir(path)?;
            Some(RoundLogger::append(path)?)
        }
        None => None,
    };

    writeln!(
        out,
        "play: rounds={} bet={} seed={} balance={} tie_rule={}",
        rounds, cfg.bet, seed, cfg.starting_balance, cfg.tie_rule
    )?;
    info!(seed, rounds, bet = cfg.bet, "session started");

    let mut summary = SessionSummary::default();
    for i in 1..=rounds {
        let outcome = match engine.play_round(cfg.bet) {
            Ok(outcome) => outcome,
            Err(GameError::InsufficientBalance { bet, balance }) => {
                ui::display_warning(
                    err,
                    &format!("balance {} cannot cover bet {}; session ended", balance, bet),
                )?;
                break;
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(out, "{}", format_outcome(i, &outcome))?;

        let round_id = match logger.as_mut() {
            Some(l) => l.next_id(),
            None => format!("round-{:06}", i),
        };
        let record =
            RoundRecord::from_outcome(round_id, Some(engine.deck().seed()), cfg.tie_rule, &outcome);
        if let Some(l) = logger.as_mut() {
            l.write(&record)?;
        }
        summary.record(&record);
    }

    writeln!(out, "Rounds played: {} of {}", summary.rounds, rounds)?;
    writeln!(
        out,
        "Wins: {} Losses: {} Pushes: {}",
        summary.player_wins, summary.house_wins, summary.pushes
    )?;
    writeln!(out, "Net: {}", summary.net)?;
    writeln!(out, "Final balance: {}", engine.balance())?;
    if let Some(path) = &output {
        writeln!(out, "Round log: {}", path.display())?;
    }
    info!(
        rounds = summary.rounds,
        net = summary.net as i64,
        balance = engine.balance(),
        "session finished"
    );
    Ok(())
}
