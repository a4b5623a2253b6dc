use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order is the tiebreak order: Clubs < Diamonds < Hearts < Spades.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Represents the rank (face value) of a playing card from Ace through King.
/// Ace is low: numeric values run from 1 (Ace) to 13 (King).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Represents a single playing card with a rank and a suit.
/// Cards are plain values: two cards are the same card iff rank and suit match.
///
/// Field order makes the derived `Ord` compare rank first and suit second,
/// which is exactly the high-card comparison used by rounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parses the short notation produced by `Display` (`AS`, `10H`, `kd`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || GameError::InvalidArgument(format!("invalid card notation: {:?}", s));
        let mut chars = s.chars();
        let suit = match chars.next_back().map(|c| c.to_ascii_uppercase()) {
            Some('C') => Suit::Clubs,
            Some('D') => Suit::Diamonds,
            Some('H') => Suit::Hearts,
            Some('S') => Suit::Spades,
            _ => return Err(invalid()),
        };
        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "T" => Rank::Ten,
            digits => digits
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_u8)
                .ok_or_else(invalid)?,
        };
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Builds the 52 cards in suit-major order, unshuffled.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ace_is_low() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert!(Rank::Ace < Rank::Two);
    }

    #[test]
    fn card_ordering_is_rank_then_suit() {
        let two_clubs = Card::new(Rank::Two, Suit::Clubs);
        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        let two_spades = Card::new(Rank::Two, Suit::Spades);
        assert!(ace_spades < two_clubs);
        assert!(two_clubs < two_spades);
    }

    #[test]
    fn short_notation() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "AS");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10H");
        assert_eq!("kd".parse::<Card>().unwrap(), Card::new(Rank::King, Suit::Diamonds));
        assert_eq!("Tc".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Clubs));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<Card>().is_err());
        assert!("14S".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
        assert!("S".parse::<Card>().is_err());
    }

    #[test]
    fn rank_from_u8_bounds() {
        assert_eq!(Rank::from_u8(0), None);
        assert_eq!(Rank::from_u8(14), None);
        assert_eq!(Rank::from_u8(11), Some(Rank::Jack));
    }
}
