//! Presentation adapter contract.
//!
//! A front-end (window, terminal, test harness) owns a `Presenter`,
//! forwards each user `Intent` to `handle`, and renders `frame()`. It has
//! no other way to touch engine state.
//!
//! ```
//! use dominoes::adapter::{Outcome, Presenter};
//! use dominoes::core::Intent;
//! use dominoes::rules::Engine;
//!
//! let mut presenter = Presenter::new(Engine::with_seed(42));
//!
//! // Drawing is refused while a tile can be played.
//! let outcomes = presenter.handle(Intent::Draw);
//! assert_eq!(outcomes.as_slice(), &[Outcome::HasLegalMove]);
//!
//! let outcomes = presenter.handle(Intent::PlayTile(0));
//! assert_eq!(outcomes[0], Outcome::Ok);
//! assert_eq!(outcomes.len(), 2);
//! ```

mod frame;

pub use frame::{Frame, HandTile};

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{Intent, PlayError, Side};
use crate::rules::{DrawOutcome, Engine, OpponentOutcome};
use crate::tiles::Tile;

/// What happened in response to an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The player's tile was played.
    Ok,
    /// The player's tile matches neither end.
    IllegalMove,
    /// No tile at that hand index.
    BadIndex,
    /// The opponent is to move.
    OutOfTurn,
    /// A draw was refused because a tile can be played.
    HasLegalMove,
    /// The player drew this tile.
    Drew(Tile),
    /// Both sides were stuck; tiles were re-dealt.
    Redistributed,
    /// The player is stuck on an empty stock but the opponent is not.
    DeadlockUnresolved,
    /// The opponent replied with this tile.
    OpponentPlayed(Tile),
    /// The opponent could not reply.
    OpponentNoMove,
}

impl Outcome {
    /// Default user-facing text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Outcome::Ok => "You played a tile.".to_string(),
            Outcome::IllegalMove => "Invalid move! Try another piece.".to_string(),
            Outcome::BadIndex => "There is no tile there.".to_string(),
            Outcome::OutOfTurn => "Wait for your opponent to move.".to_string(),
            Outcome::HasLegalMove => "You can still play a tile.".to_string(),
            Outcome::Drew(tile) => format!("You drew {tile}."),
            Outcome::Redistributed => {
                "Nobody could move: all unplayed tiles were shuffled and dealt again.".to_string()
            }
            Outcome::DeadlockUnresolved => {
                "No tiles left to draw, but your opponent can still play.".to_string()
            }
            Outcome::OpponentPlayed(tile) => format!("Opponent played {tile}."),
            Outcome::OpponentNoMove => "Opponent could not move.".to_string(),
        }
    }

    /// Whether the outcome reports a rejected intent.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Outcome::IllegalMove
                | Outcome::BadIndex
                | Outcome::OutOfTurn
                | Outcome::HasLegalMove
                | Outcome::DeadlockUnresolved
        )
    }
}

impl From<DrawOutcome> for Outcome {
    fn from(outcome: DrawOutcome) -> Self {
        match outcome {
            DrawOutcome::HasLegalMove => Outcome::HasLegalMove,
            DrawOutcome::Drew(tile) => Outcome::Drew(tile),
            DrawOutcome::Redistributed => Outcome::Redistributed,
            DrawOutcome::DeadlockUnresolved => Outcome::DeadlockUnresolved,
        }
    }
}

impl From<OpponentOutcome> for Outcome {
    fn from(outcome: OpponentOutcome) -> Self {
        match outcome {
            OpponentOutcome::Played { placement, .. } => Outcome::OpponentPlayed(placement.tile),
            OpponentOutcome::NoMove { .. } => Outcome::OpponentNoMove,
        }
    }
}

/// Outcomes of one intent: at most a player result and an opponent reply.
pub type Outcomes = SmallVec<[Outcome; 2]>;

/// Owns the engine on behalf of a front-end.
#[derive(Clone, Debug)]
pub struct Presenter {
    engine: Engine,
    last: Outcomes,
}

impl Presenter {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            last: SmallVec::new(),
        }
    }

    /// Read-only access to the engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Outcomes of the most recent intent.
    #[must_use]
    pub fn last_outcomes(&self) -> &[Outcome] {
        &self.last
    }

    /// Apply one user intent for the player.
    ///
    /// A successful play is always followed by the opponent's reply before
    /// this returns.
    pub fn handle(&mut self, intent: Intent) -> Outcomes {
        let outcomes: Outcomes = match intent {
            Intent::PlayTile(index) => match self.engine.player_turn(index) {
                Ok(report) => smallvec![Outcome::Ok, report.opponent.into()],
                Err(PlayError::IllegalMove { .. }) => smallvec![Outcome::IllegalMove],
                Err(PlayError::BadIndex { .. }) => smallvec![Outcome::BadIndex],
                Err(PlayError::NotYourTurn { .. }) => smallvec![Outcome::OutOfTurn],
                Err(err @ PlayError::Chain(_)) => {
                    log::warn!("play rejected by chain: {err}");
                    smallvec![Outcome::IllegalMove]
                }
            },
            Intent::Draw => smallvec![self.engine.request_draw(Side::Player).into()],
        };
        self.last = outcomes.clone();
        outcomes
    }

    /// Snapshot of everything a front-end may show.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.engine, &self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::IllegalMove.message(), "Invalid move! Try another piece.");
        assert_eq!(Outcome::Drew(Tile::new(2, 4)).message(), "You drew [2|4].");
        assert_eq!(
            Outcome::OpponentPlayed(Tile::new(5, 6)).message(),
            "Opponent played [5|6]."
        );
    }

    #[test]
    fn test_rejections() {
        assert!(Outcome::IllegalMove.is_rejection());
        assert!(Outcome::HasLegalMove.is_rejection());
        assert!(!Outcome::Ok.is_rejection());
        assert!(!Outcome::Redistributed.is_rejection());
    }

    #[test]
    fn test_draw_outcome_conversion() {
        assert_eq!(Outcome::from(DrawOutcome::Redistributed), Outcome::Redistributed);
        assert_eq!(
            Outcome::from(DrawOutcome::Drew(Tile::new(1, 1))),
            Outcome::Drew(Tile::new(1, 1))
        );
    }

    #[test]
    fn test_last_outcomes_tracked() {
        let mut presenter = Presenter::new(Engine::with_seed(9));
        assert!(presenter.last_outcomes().is_empty());

        presenter.handle(Intent::PlayTile(40));
        assert_eq!(presenter.last_outcomes(), &[Outcome::BadIndex]);
    }

    #[test]
    fn test_play_refused_while_opponent_to_move() {
        let engine = Engine::builder()
            .chain([(3, 5)])
            .player_hand([(5, 6)])
            .opponent_hand([(0, 0)])
            .to_move(Side::Opponent)
            .build()
            .unwrap();
        let mut presenter = Presenter::new(engine);

        let outcomes = presenter.handle(Intent::PlayTile(0));
        assert_eq!(outcomes.as_slice(), &[Outcome::OutOfTurn]);
        assert!(outcomes[0].is_rejection());
        assert_eq!(presenter.engine().hand(Side::Player).len(), 1);
    }
}
