//! Deal command: draws cards from a freshly shuffled deck.

use crate::error::CliError;
use crate::formatters::format_cards;
use highcard_engine::deck::Deck;
use highcard_engine::rng::next_seed;
use std::io::Write;

/// Shuffles a deck for `seed` (or a fresh seed) and prints the first `count`
/// cards. Fails with an engine error when `count` exceeds the deck.
pub fn handle_deal_command(
    seed: Option<u64>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut deck = Deck::new_with_seed(seed.unwrap_or_else(next_seed));
    let cards = deck.draw_n(count)?;
    writeln!(out, "Seed: {}", deck.seed())?;
    writeln!(out, "Cards: {}", format_cards(&cards))?;
    writeln!(out, "Remaining: {}", deck.remaining())?;
    Ok(())
}
