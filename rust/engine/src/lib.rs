//! # holdem-engine: Hold'em Game Round Engine
//!
//! Simulates a single Texas Hold'em table for one hand at a time: a seeded
//! deck, per-seat chip and card state, and a round state machine that moves
//! strictly from preflop to flop, turn and river.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and canonical deck order
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - Table orchestration: seating, hole cards, community cards, pot
//! - [`game`] - Round enum and its guarded transitions
//! - [`player`] - Player state, betting and fold handling
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::engine::Engine;
//!
//! let mut engine = Engine::new(Some(7));
//! engine.add_player("Alice", 1000).unwrap();
//! engine.add_player("Bob", 1000).unwrap();
//! engine.start().unwrap();
//!
//! for p in engine.players() {
//!     println!("{}", p);
//! }
//! assert_eq!(engine.deck_remaining(), 48);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.cards(), d2.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
