//! # highcard-engine: High-Card Game Core
//!
//! A deterministic high-card wagering engine. A 52-card deck is shuffled with
//! Fisher–Yates and dealt without replacement; each round draws one card for
//! the player and one for the house, compares them, and settles the bet
//! against a balance.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded Fisher–Yates deck with no-repeat draws
//! - [`rng`] - Seeded streams and the process-wide default source
//! - [`engine`] - Round orchestration and balance management
//! - [`rules`] - Card comparison, tie rules, bet validation and payouts
//! - [`logger`] - RoundRecord JSONL serialization and session summaries
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use highcard_engine::engine::RoundEngine;
//!
//! let mut engine = RoundEngine::with_seed(7, 100);
//! let outcome = engine.play_round(10).unwrap();
//! println!(
//!     "{} vs {}: {} (balance {})",
//!     outcome.player_card, outcome.house_card, outcome.result, outcome.balance
//! );
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All outcomes are reproducible using a seed:
//!
//! ```rust
//! use highcard_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.draw().unwrap(), deck2.draw().unwrap());
//! ```
//!
//! ## Bet Validation
//!
//! ```rust
//! use highcard_engine::engine::RoundEngine;
//! use highcard_engine::errors::GameError;
//!
//! let mut engine = RoundEngine::with_seed(1, 5);
//! assert_eq!(
//!     engine.play_round(10),
//!     Err(GameError::InsufficientBalance { bet: 10, balance: 5 })
//! );
//! assert_eq!(engine.balance(), 5);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod rng;
pub mod rules;
