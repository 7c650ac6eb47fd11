//! Rules of the match.
//!
//! - `placement`: Which end a tile joins and which way it faces
//! - `opponent`: How the opponent picks a tile
//! - `engine`: The `Engine` that owns all state and applies the rules
//!
//! Illegal requests come back as `PlayError`; every other condition
//! (refused draws, stalemates, an opponent with no move) is an outcome
//! value, never a panic.

pub mod engine;
pub mod opponent;
pub mod outcome;
pub mod placement;

pub use engine::{Engine, EngineBuilder};
pub use opponent::{FirstFit, OpponentPolicy};
pub use outcome::{DrawOutcome, OpponentOutcome, TurnReport};
pub use placement::{place, Placement};
