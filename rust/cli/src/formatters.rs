//! Card and round formatters for terminal display.
//!
//! Cards print in the engine's short notation (`AS`, `10H`), so anything shown
//! by `deal` or `stats --list` parses back with `Card::from_str`.
//!
//! ## Example
//!
//! ```rust
//! use highcard_engine::cards::{Card, Rank, Suit};
//! use highcard_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert_eq!(format_card(&ace_spades), "AS");
//! assert_eq!(format_cards(&[ace_spades]), "[AS]");
//! ```

use highcard_engine::cards::Card;
use highcard_engine::engine::RoundOutcome;
use highcard_engine::rules::RoundResult;

/// String like "AS" or "10H".
pub fn format_card(card: &Card) -> String {
    card.to_string()
}

/// Bracketed, space-separated cards, or "[]" when empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_result(result: RoundResult) -> &'static str {
    match result {
        RoundResult::PlayerWin => "player wins",
        RoundResult::HouseWin => "house wins",
        RoundResult::Push => "push",
    }
}

/// One line per round: cards, outcome, signed change and resulting balance.
pub fn format_outcome(round: u32, outcome: &RoundOutcome) -> String {
    let net = outcome.net();
    let sign = if net > 0 { "+" } else { "" };
    let mut line = format!(
        "Round {}: player {} vs house {} -> {} ({}{}) balance={}",
        round,
        format_card(&outcome.player_card),
        format_card(&outcome.house_card),
        format_result(outcome.result),
        sign,
        net,
        outcome.balance
    );
    if outcome.reshuffled {
        line.push_str(" [reshuffled]");
    }
    line
}
