//! Results of engine operations that are not errors.

use serde::{Deserialize, Serialize};

use super::placement::Placement;
use crate::tiles::Tile;

/// Result of asking to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// The side can already play; nothing changed.
    HasLegalMove,
    /// One tile moved from the stock into the side's hand.
    Drew(Tile),
    /// Both sides were stuck on an empty stock; tiles were re-dealt.
    Redistributed,
    /// The side is stuck and the stock is empty, but the other side can
    /// still play.
    DeadlockUnresolved,
}

/// Result of the opponent's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentOutcome {
    /// The opponent played, after drawing `draws` tiles.
    Played { placement: Placement, draws: usize },
    /// The stock ran out with nothing playable.
    NoMove { draws: usize },
}

impl OpponentOutcome {
    /// The tile the opponent played, if any.
    #[must_use]
    pub fn played(&self) -> Option<Tile> {
        match self {
            OpponentOutcome::Played { placement, .. } => Some(placement.tile),
            OpponentOutcome::NoMove { .. } => None,
        }
    }

    /// Tiles drawn during the turn.
    #[must_use]
    pub fn draws(&self) -> usize {
        match *self {
            OpponentOutcome::Played { draws, .. } | OpponentOutcome::NoMove { draws } => draws,
        }
    }
}

/// A player play followed by the opponent's reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub player: Placement,
    pub opponent: OpponentOutcome,
}
