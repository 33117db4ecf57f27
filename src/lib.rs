//! # fool-engine
//!
//! Rules engine and computer opponent for the card game Fool ("Durak").
//!
//! ## Design Principles
//!
//! 1. **Single Authority**: `TurnCoordinator` owns every card. Seats submit
//!    moves and get back an outcome; an illegal move changes nothing.
//!
//! 2. **N-Player First**: Two to five seats, optionally as two teams of two.
//!    Seat APIs take the rules or the out-of-play mask as context.
//!
//! 3. **Rules Frozen at Start**: A `RuleSet` is validated once and never
//!    changes during a game.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, rule configuration, errors
//! - `cards`: Suits, ranks, cards, the deck and hands
//! - `table`: Attack/defense slots and the discard pile
//! - `engine`: Turn phases, seat resolution, legality and the coordinator
//! - `ai`: Strategy trait, hand valuation, heuristic and random players
//!
//! ## Example
//!
//! ```
//! use fool_engine::{GameRng, Heuristic, RuleSet, TurnCoordinator};
//!
//! let rules = RuleSet::default().with_player_count(3);
//! let mut game = TurnCoordinator::new(rules, GameRng::new(7)).unwrap();
//! let mut ai = Heuristic::new();
//!
//! while game.step(&mut ai).unwrap().is_some() {}
//! assert!(game.is_game_over());
//! ```

pub mod ai;
pub mod cards;
pub mod core;
pub mod engine;
pub mod table;

pub use crate::core::{
    ConfigError, EngineError, GameRng, Player, PlayerId, PlayerMap, RuleSet, RuleSetBuilder,
    DEAL_LIMIT,
};

pub use crate::cards::{Card, Deck, Hand, Rank, SortingMode, Suit};

pub use crate::table::{DiscardPile, Slot, Table};

pub use crate::engine::{
    CardLocation, Decision, GameResult, Move, MoveKind, MoveOutcome, Notification, Rejection,
    Settlement, TurnCoordinator, TurnPhase,
};

pub use crate::ai::{Heuristic, RandomStrategy, Snapshot, Strategy};
