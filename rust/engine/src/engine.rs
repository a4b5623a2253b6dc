use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::rules::{compare_cards, payout, validate_bet, RoundResult, TieRule};

/// Cards consumed by one round: one for the player, one for the house.
pub const CARDS_PER_ROUND: usize = 2;

/// Everything a finished round produced.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub result: RoundResult,
    pub player_card: Card,
    pub house_card: Card,
    pub bet: u64,
    /// Balance before the bet was deducted
    pub balance_before: u64,
    /// Balance after settlement
    pub balance: u64,
    /// Whether the deck was rebuilt before drawing
    pub reshuffled: bool,
}

impl RoundOutcome {
    /// Signed balance change produced by the round.
    pub fn net(&self) -> i128 {
        i128::from(self.balance) - i128::from(self.balance_before)
    }
}

/// High-card game: owns one deck and one balance and settles wagered rounds.
///
/// # Examples
///
/// ```
/// use highcard_engine::engine::RoundEngine;
/// use highcard_engine::rules::RoundResult;
///
/// let mut engine = RoundEngine::with_seed(1, 100);
/// let outcome = engine.play_round(10).unwrap();
///
/// match outcome.result {
///     RoundResult::PlayerWin => assert_eq!(engine.balance(), 110),
///     RoundResult::HouseWin => assert_eq!(engine.balance(), 90),
///     RoundResult::Push => assert_eq!(engine.balance(), 100),
/// }
/// assert_eq!(engine.deck_remaining(), 50);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    /// Exclusively owned deck
    deck: Deck,
    /// Current balance, never negative
    balance: u64,
    /// Resolution of equal ranks
    tie_rule: TieRule,
}

impl RoundEngine {
    /// Engine backed by a deck seeded from the process-wide default source.
    pub fn new(starting_balance: u64) -> Self {
        Self::with_deck(Deck::new(), starting_balance)
    }

    pub fn with_seed(seed: u64, starting_balance: u64) -> Self {
        Self::with_deck(Deck::new_with_seed(seed), starting_balance)
    }

    pub fn with_deck(deck: Deck, starting_balance: u64) -> Self {
        Self {
            deck,
            balance: starting_balance,
            tie_rule: TieRule::default(),
        }
    }

    pub fn with_tie_rule(mut self, tie_rule: TieRule) -> Self {
        self.tie_rule = tie_rule;
        self
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn tie_rule(&self) -> TieRule {
        self.tie_rule
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn reshuffle(&mut self) {
        self.deck.reset_and_shuffle();
    }

    /// Adds `amount` to the balance and returns the new balance.
    pub fn add_funds(&mut self, amount: u64) -> Result<u64, GameError> {
        if amount == 0 {
            return Err(GameError::InvalidArgument("amount must be positive".into()));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| GameError::InvalidArgument("balance would overflow".into()))?;
        Ok(self.balance)
    }

    /// Plays one wagered round.
    ///
    /// The bet is validated before anything changes; a rejected bet leaves
    /// both the balance and the deck untouched. When fewer than two cards
    /// remain the deck is rebuilt and reshuffled first, so an accepted bet
    /// always completes.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidArgument`] - the bet is zero, or a win would overflow the balance
    /// - [`GameError::InsufficientBalance`] - the bet exceeds the balance
    pub fn play_round(&mut self, bet: u64) -> Result<RoundOutcome, GameError> {
        validate_bet(self.balance, bet)?;
        if self.balance.checked_add(bet).is_none() {
            return Err(GameError::InvalidArgument(
                "bet would overflow the balance on a win".into(),
            ));
        }

        let reshuffled = self.deck.remaining() < CARDS_PER_ROUND;
        if reshuffled {
            debug!(
                remaining = self.deck.remaining(),
                seed = self.deck.seed(),
                "reshuffling deck before round"
            );
            self.deck.reset_and_shuffle();
        }

        let balance_before = self.balance;
        let staked = balance_before - bet;
        let player_card = self.deck.draw()?;
        let house_card = self.deck.draw()?;
        let result = compare_cards(player_card, house_card, self.tie_rule);
        // bounded by balance_before + bet, checked above
        self.balance = staked + payout(result, bet);

        debug!(
            %player_card,
            %house_card,
            %result,
            bet,
            balance = self.balance,
            "round resolved"
        );

        Ok(RoundOutcome {
            result,
            player_card,
            house_card,
            bet,
            balance_before,
            balance: self.balance,
            reshuffled,
        })
    }
}
