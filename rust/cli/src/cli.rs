//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use highcard_engine::rules::TieRule;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "highcard",
    version,
    about = "High-card wagering game: seeded deck, player vs house"
)]
pub struct HighcardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play wagered rounds against the house
    Play {
        /// Number of rounds to play
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        /// Wager per round (defaults to configured bet)
        #[arg(long)]
        bet: Option<u64>,
        /// Deck seed for reproducible play
        #[arg(long)]
        seed: Option<u64>,
        /// Starting balance (defaults to configured starting_balance)
        #[arg(long)]
        balance: Option<u64>,
        /// How equal ranks are resolved: suit-breaks or rank-only
        #[arg(long, value_parser = parse_tie_rule)]
        tie_rule: Option<TieRule>,
        /// Append finished rounds to this JSONL file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Draw cards from a freshly shuffled deck
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Number of cards to draw
        #[arg(long, default_value_t = 2)]
        count: usize,
    },
    /// Print a sample from the seeded RNG
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Summarize a JSONL round log (file or directory)
    Stats {
        #[arg(long)]
        input: PathBuf,
        /// Also list every round, ordered by timestamp
        #[arg(long)]
        list: bool,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

fn parse_tie_rule(s: &str) -> Result<TieRule, String> {
    s.parse().map_err(|e: highcard_engine::errors::GameError| e.to_string())
}
