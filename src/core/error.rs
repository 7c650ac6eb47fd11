//! Error types.
//!
//! Every engine error is recoverable: an operation that returns an error
//! has left the engine exactly as it found it.

use thiserror::Error;

use super::side::Side;
use crate::tiles::{OrientedTile, Tile};

/// A pip value or tile description outside the double-six set.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TileError {
    #[error("pip out of range: {0}-{1}")]
    PipOutOfRange(u8, u8),
    #[error("cannot parse tile: {0:?}")]
    Parse(String),
}

/// A chain append that would break adjacency.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainError {
    #[error("{tile} does not meet the left end {end}")]
    LeftMismatch { tile: OrientedTile, end: u8 },
    #[error("{tile} does not meet the right end {end}")]
    RightMismatch { tile: OrientedTile, end: u8 },
    #[error("opening play on a chain that already has tiles")]
    NotEmpty,
    #[error("end play on an empty chain")]
    Empty,
}

/// A rejected play.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayError {
    #[error("{tile} matches neither end of the chain")]
    IllegalMove { tile: Tile },
    #[error("hand index {index} out of range for {side} hand of {len}")]
    BadIndex { side: Side, index: usize, len: usize },
    #[error("{side} cannot play out of turn")]
    NotYourTurn { side: Side },
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// An engine position that could not be assembled.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("{0} appears more than once")]
    DuplicateTile(Tile),
    #[error("chain is not connected: {0}")]
    BrokenChain(#[from] ChainError),
    #[error("hand size {size} exceeds {max}")]
    HandSize { size: usize, max: usize },
    #[error(transparent)]
    Tile(#[from] TileError),
}

/// A broken engine invariant. Seeing one of these is a bug.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("expected {expected} tiles across hands, chain and stock, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("{0} is held in more than one place")]
    Duplicated(Tile),
    #[error("{0} is missing from hands, chain and stock")]
    Missing(Tile),
    #[error("chain adjacency broken at position {0}")]
    Disconnected(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_error_messages() {
        let err = PlayError::IllegalMove {
            tile: Tile::new(0, 1),
        };
        assert_eq!(err.to_string(), "[0|1] matches neither end of the chain");

        let err = PlayError::BadIndex {
            side: Side::Player,
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "hand index 7 out of range for Player hand of 3");

        let err = PlayError::NotYourTurn { side: Side::Player };
        assert_eq!(err.to_string(), "Player cannot play out of turn");
    }

    #[test]
    fn test_chain_error_converts() {
        let err: PlayError = ChainError::Empty.into();
        assert_eq!(err, PlayError::Chain(ChainError::Empty));
        assert_eq!(err.to_string(), "end play on an empty chain");
    }

    #[test]
    fn test_setup_error_from_chain() {
        let err: SetupError = ChainError::RightMismatch {
            tile: OrientedTile::new(1, 2),
            end: 5,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "chain is not connected: [1|2] does not meet the right end 5"
        );
    }
}
