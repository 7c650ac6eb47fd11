//! The line of played tiles.
//!
//! The chain exposes its two endpoints to the rules; everything else is
//! read-only. Every successful append keeps the adjacency invariant
//! `tiles[i].right == tiles[i + 1].left`, and a failed append leaves the
//! chain untouched.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::ChainError;
use crate::tiles::{OrientedTile, Tile};

/// Where a tile joined the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attach {
    /// Sole tile of a previously empty chain.
    Opening,
    /// Prepended; its right pip meets the old left end.
    Left,
    /// Appended; its left pip meets the old right end.
    Right,
}

/// Ordered sequence of oriented tiles.
///
/// Backed by an `im::Vector` so clones are O(1) and both ends grow in
/// amortised O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Chain {
    tiles: Vector<OrientedTile>,
}

impl Chain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `(left_end, right_end)`, or `None` for an empty chain.
    #[must_use]
    pub fn endpoints(&self) -> Option<(u8, u8)> {
        Some((self.tiles.front()?.left, self.tiles.back()?.right))
    }

    #[must_use]
    pub fn left_end(&self) -> Option<u8> {
        self.tiles.front().map(|t| t.left)
    }

    #[must_use]
    pub fn right_end(&self) -> Option<u8> {
        self.tiles.back().map(|t| t.right)
    }

    /// Would `tile` match either end? Always true on an empty chain.
    #[must_use]
    pub fn accepts(&self, tile: Tile) -> bool {
        match self.endpoints() {
            None => true,
            Some((l, r)) => tile.has(l) || tile.has(r),
        }
    }

    /// Lay the first tile in its natural orientation.
    pub fn first_play(&mut self, tile: Tile) -> Result<(), ChainError> {
        if !self.is_empty() {
            return Err(ChainError::NotEmpty);
        }
        self.tiles.push_back(tile.oriented());
        Ok(())
    }

    /// Prepend a tile whose right pip equals the left end.
    pub fn append_left(&mut self, tile: OrientedTile) -> Result<(), ChainError> {
        let end = self.left_end().ok_or(ChainError::Empty)?;
        if tile.right != end {
            return Err(ChainError::LeftMismatch { tile, end });
        }
        self.tiles.push_front(tile);
        Ok(())
    }

    /// Append a tile whose left pip equals the right end.
    pub fn append_right(&mut self, tile: OrientedTile) -> Result<(), ChainError> {
        let end = self.right_end().ok_or(ChainError::Empty)?;
        if tile.left != end {
            return Err(ChainError::RightMismatch { tile, end });
        }
        self.tiles.push_back(tile);
        Ok(())
    }

    /// Lay an oriented tile at the given position.
    pub fn attach(&mut self, at: Attach, tile: OrientedTile) -> Result<(), ChainError> {
        match at {
            Attach::Opening => {
                if !self.is_empty() {
                    return Err(ChainError::NotEmpty);
                }
                self.tiles.push_back(tile);
                Ok(())
            }
            Attach::Left => self.append_left(tile),
            Attach::Right => self.append_right(tile),
        }
    }

    /// Tiles from left to right.
    pub fn iter(&self) -> impl Iterator<Item = &OrientedTile> + '_ {
        self.tiles.iter()
    }

    /// Index of the first tile whose right pip does not meet its
    /// successor's left pip.
    #[must_use]
    pub fn first_break(&self) -> Option<usize> {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .position(|(a, b)| a.right != b.left)
    }
}
