//! Intents and action history.
//!
//! An `Intent` is what an adapter asks for ("play hand tile 2", "draw").
//! An `Action` is what the engine actually did to its state. Every action
//! is appended to the engine's history as an `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::rules::Placement;
use crate::tiles::Tile;

/// A discrete user request forwarded by a presentation adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Attempt to play the player's tile at this hand index.
    PlayTile(usize),
    /// Attempt to draw, or trigger redistribution when both sides are stuck.
    Draw,
}

/// A state change applied by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A tile left a hand and joined the chain.
    Play(Placement),
    /// A tile moved from the stock into a hand.
    Draw(Tile),
    /// Hands and stock were pooled, reshuffled and dealt again.
    Redistribute,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side whose hand the action touched.
    ///
    /// For `Redistribute`, the side that requested the draw.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Position in the match history (starts at 0).
    pub sequence: usize,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, sequence: usize) -> Self {
        Self {
            side,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_equality() {
        assert_eq!(Intent::PlayTile(1), Intent::PlayTile(1));
        assert_ne!(Intent::PlayTile(1), Intent::PlayTile(2));
        assert_ne!(Intent::PlayTile(0), Intent::Draw);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Side::Opponent, Action::Draw(Tile::new(2, 4)), 3);

        assert_eq!(record.side, Side::Opponent);
        assert_eq!(record.action, Action::Draw(Tile::new(4, 2)));
        assert_eq!(record.sequence, 3);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Side::Player, Action::Redistribute, 9);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_intent_serialization() {
        let json = serde_json::to_string(&Intent::PlayTile(4)).unwrap();
        let deserialized: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Intent::PlayTile(4));
    }
}
