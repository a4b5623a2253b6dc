use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::cards::Card;
use crate::errors::GameError;

/// Outcome of a single round from the player's point of view.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Player card outranks the house card; pays 1:1
    PlayerWin,
    /// House card outranks the player card; bet is lost
    HouseWin,
    /// Cards tie; bet is refunded. Only reachable under [`TieRule::RankOnly`]
    Push,
}

impl RoundResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundResult::PlayerWin => "player-win",
            RoundResult::HouseWin => "house-win",
            RoundResult::Push => "push",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How two cards of equal rank are resolved.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieRule {
    /// Equal ranks fall back to suit order (Clubs < Diamonds < Hearts < Spades),
    /// so two distinct cards never push.
    #[default]
    SuitBreaks,
    /// Equal ranks push regardless of suit.
    RankOnly,
}

impl TieRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieRule::SuitBreaks => "suit-breaks",
            TieRule::RankOnly => "rank-only",
        }
    }
}

impl fmt::Display for TieRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieRule {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "suit-breaks" | "suit" => Ok(TieRule::SuitBreaks),
            "rank-only" | "rank" => Ok(TieRule::RankOnly),
            other => Err(GameError::InvalidArgument(format!(
                "unknown tie rule: {other} (expected suit-breaks or rank-only)"
            ))),
        }
    }
}

/// Resolves a player card against a house card.
///
/// Rank decides first, Ace low (Ace=1 … King=13). On a rank tie the
/// [`TieRule`] decides: [`TieRule::SuitBreaks`] compares suits by their fixed
/// order, [`TieRule::RankOnly`] reports a push.
///
/// # Examples
///
/// ```
/// use highcard_engine::cards::{Card, Rank, Suit};
/// use highcard_engine::rules::{compare_cards, RoundResult, TieRule};
///
/// let player = Card::new(Rank::Queen, Suit::Hearts);
/// let house = Card::new(Rank::Queen, Suit::Clubs);
///
/// assert_eq!(compare_cards(player, house, TieRule::SuitBreaks), RoundResult::PlayerWin);
/// assert_eq!(compare_cards(player, house, TieRule::RankOnly), RoundResult::Push);
///
/// // Ace is low
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let two = Card::new(Rank::Two, Suit::Clubs);
/// assert_eq!(compare_cards(ace, two, TieRule::SuitBreaks), RoundResult::HouseWin);
/// ```
pub fn compare_cards(player: Card, house: Card, rule: TieRule) -> RoundResult {
    let ordering = match rule {
        TieRule::SuitBreaks => player
            .rank
            .cmp(&house.rank)
            .then_with(|| player.suit.cmp(&house.suit)),
        TieRule::RankOnly => player.rank.cmp(&house.rank),
    };
    match ordering {
        Ordering::Greater => RoundResult::PlayerWin,
        Ordering::Less => RoundResult::HouseWin,
        Ordering::Equal => RoundResult::Push,
    }
}

/// Checks a wager against the current balance.
///
/// # Errors
///
/// - [`GameError::InvalidArgument`] - the bet is zero
/// - [`GameError::InsufficientBalance`] - the bet exceeds the balance
pub fn validate_bet(balance: u64, bet: u64) -> Result<(), GameError> {
    if bet == 0 {
        return Err(GameError::InvalidArgument("bet must be positive".into()));
    }
    if bet > balance {
        return Err(GameError::InsufficientBalance { bet, balance });
    }
    Ok(())
}

/// Amount returned to the player after the bet has already been deducted.
pub fn payout(result: RoundResult, bet: u64) -> u64 {
    match result {
        RoundResult::PlayerWin => bet.saturating_mul(2),
        RoundResult::Push => bet,
        RoundResult::HouseWin => 0,
    }
}
