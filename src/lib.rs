//! # dominoes
//!
//! A two-player double-six dominoes engine: a human player against a
//! deterministic, rule-driven opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: Chain, hands and stock are mutated only
//!    through `Engine` methods. Views are shared borrows or snapshots.
//!
//! 2. **Side, not actor types**: Player and opponent follow identical
//!    rules; a `Side` tag selects whose hand is touched.
//!
//! 3. **Reproducible**: Every shuffle goes through a seeded `GameRng`.
//!    Same seed, same deal, same opponent replies.
//!
//! 4. **No partial updates**: An operation either completes or returns an
//!    error with the state unchanged.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, intents, errors
//! - `tiles`: Unordered and oriented tiles, the double-six set
//! - `zones`: Chain, hands, stock
//! - `rules`: Placement policy, opponent policy, the `Engine`
//! - `adapter`: The contract a front-end uses to drive a match

pub mod core;
pub mod tiles;
pub mod zones;
pub mod rules;
pub mod adapter;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ChainError, GameConfig, GameRng, Intent, InvariantViolation, PlayError,
    SetupError, Side, SideMap, TileError,
};

pub use crate::tiles::{double_six, OrientedTile, Tile, TILE_COUNT};

pub use crate::zones::{Attach, Chain, Hand, Stock};

pub use crate::rules::{
    DrawOutcome, Engine, EngineBuilder, FirstFit, OpponentOutcome, OpponentPolicy, Placement,
    TurnReport,
};

pub use crate::adapter::{Frame, HandTile, Outcome, Outcomes, Presenter};
