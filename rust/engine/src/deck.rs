use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;
use crate::rng;

/// A shuffled pool of the 52 distinct cards with a draw cursor.
/// Cards before the cursor have been dealt and are never returned again until
/// the next [`Deck::reset_and_shuffle`].
///
/// # Examples
///
/// ```
/// use highcard_engine::deck::Deck;
///
/// // Same seed produces the same order
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// assert_eq!(a.draw_n(5).unwrap(), b.draw_n(5).unwrap());
/// assert_eq!(a.remaining(), 47);
/// ```
#[derive(Debug)]
pub struct Deck {
    /// Current permutation of the full card set
    cards: Vec<Card>,
    /// Number of cards already drawn
    position: usize,
    /// Stream driving every shuffle of this deck
    rng: ChaCha20Rng,
    /// Seed the stream was built from
    seed: u64,
}

impl Deck {
    /// Shuffled deck whose seed comes from the process-wide default source.
    pub fn new() -> Self {
        Self::new_with_seed(rng::next_seed())
    }

    /// Shuffled deck whose whole shuffle sequence is determined by `seed`.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            position: 0,
            rng: rng::seeded(seed),
            seed,
        };
        deck.reset_and_shuffle();
        deck
    }

    pub fn reset_and_shuffle(&mut self) {
        self.cards = full_deck();
        fisher_yates(&mut self.cards, &mut self.rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(GameError::DeckExhausted)?;
        self.position += 1;
        Ok(c)
    }

    /// Draws `count` cards in order, or none at all when fewer remain.
    pub fn draw_n(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(GameError::InsufficientCards {
                requested: count,
                remaining,
            });
        }
        (0..count).map(|_| self.draw()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn drawn(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// In-place Fisher–Yates: walks `i` from the last index down to 1 and swaps it
/// with a uniformly chosen index in `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    #[test]
    fn construction_shuffles() {
        let deck = Deck::new_with_seed(3);
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_ne!(deck.cards, full_deck(), "seed 3 should not leave factory order");
    }

    #[test]
    fn fisher_yates_keeps_every_element() {
        let mut items: Vec<u32> = (0..100).collect();
        let mut r = rng::seeded(11);
        fisher_yates(&mut items, &mut r);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn fisher_yates_handles_tiny_slices() {
        let mut r = rng::seeded(1);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut r);
        let mut one = [9u8];
        fisher_yates(&mut one, &mut r);
        assert_eq!(one, [9]);
    }

    #[test]
    fn unseeded_decks_report_their_seed() {
        let deck = Deck::new();
        let mut replay = Deck::new_with_seed(deck.seed());
        let mut original = deck;
        assert_eq!(original.draw_n(52).unwrap(), replay.draw_n(52).unwrap());
    }
}
