//! Core types: seats, RNG, rule configuration and errors.
//!
//! These are shared by the card model, the table, the turn engine and the
//! decision strategies.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{deck_serves, RuleSet, RuleSetBuilder, DEAL_LIMIT, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, EngineError};
pub use player::{Player, PlayerId, PlayerMap, SEAT_NAMES};
pub use rng::GameRng;
