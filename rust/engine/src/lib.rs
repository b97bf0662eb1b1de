//! # holdem-duel-engine: Heads-up Hold'em Game Logic
//!
//! A deterministic, single-session Texas Hold'em round between a human player
//! and a computer opponent. The crate owns the deck, the hand evaluator and the
//! betting state machine; rendering and input wiring belong to the host, which
//! reads [`engine::GameSnapshot`]s and calls the action methods.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and canonical deck order
//! - [`deck`] - Fisher–Yates shuffling behind a seedable [`deck::RandomSource`]
//! - [`hand`] - Value-count hand classification
//! - [`player`] - Seats, table actions and hole cards
//! - [`rules`] - Action preconditions
//! - [`game`] - Rounds and chip accounting
//! - [`policy`] - Computer opponent decisions
//! - [`engine`] - Session orchestration and snapshots
//! - [`logger`] - Action log and serialisable session record
//! - [`config`] - Table settings from defaults, TOML and environment
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_duel_engine::config::TableConfig;
//! use holdem_duel_engine::engine::Engine;
//! use holdem_duel_engine::game::Round;
//!
//! let config = TableConfig { seed: Some(42), ..TableConfig::default() };
//! let mut engine = Engine::start(&config).expect("start session");
//!
//! let snap = engine.check().expect("nothing is owed pre-flop");
//! assert_eq!(snap.round, Round::Flop);
//! assert_eq!(snap.community.len(), 3);
//!
//! engine.next_round().unwrap();
//! engine.next_round().unwrap();
//! let snap = engine.next_round().unwrap();
//! assert!(snap.game_over);
//! assert!(snap.outcome.is_some());
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_duel_engine::deck::{Deck, SeededRandom};
//!
//! let mut d1 = Deck::new();
//! let mut d2 = Deck::new();
//! d1.shuffle(&mut SeededRandom::new(42));
//! d2.shuffle(&mut SeededRandom::new(42));
//! assert_eq!(d1, d2);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod rules;
