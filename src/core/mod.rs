//! Core engine types: sides, RNG, configuration, intents, errors.
//!
//! This module contains the building blocks shared by the tile zones and
//! the rules engine.

pub mod side;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_HAND_SIZE, MAX_HAND_SIZE};
pub use action::{Action, ActionRecord, Intent};
pub use error::{ChainError, InvariantViolation, PlayError, SetupError, TileError};
