//! The turn engine.
//!
//! ## Key Types
//!
//! - `TurnCoordinator`: owns the game and applies moves
//! - `TurnPhase`: where the current trick stands
//! - `Move` / `MoveOutcome`: what seats submit and what they get back
//! - `Notification`: broadcast for each accepted move
//!
//! `seats` resolves who attacks, defends and throws; `legality` holds the
//! card-level predicates shared with the strategies.

pub mod coordinator;
pub mod legality;
pub mod moves;
pub mod outcome;
pub mod phase;
pub mod seats;

pub use coordinator::TurnCoordinator;
pub use moves::{Decision, Move, MoveKind, PendingDecision};
pub use outcome::{
    Accepted, CardLocation, GameResult, MoveOutcome, Notification, PhasePath, Rejection, Settlement,
};
pub use phase::TurnPhase;
