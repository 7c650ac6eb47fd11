//! A side's private tiles.
//!
//! Order is insertion order: dealt tiles first, drawn tiles appended. It
//! only matters for stable display indices and for the opponent's
//! first-fit scan.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::chain::Chain;
use crate::tiles::Tile;

/// Tiles held by one side.
///
/// SmallVec keeps typical hands (up to 8 tiles) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[Tile; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Membership on the unordered identity.
    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Add a tile at the end.
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove and return the tile at `index`, shifting later tiles down.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        (index < self.tiles.len()).then(|| self.tiles.remove(index))
    }

    /// Index of the first tile the chain accepts, in hand order.
    #[must_use]
    pub fn first_playable(&self, chain: &Chain) -> Option<usize> {
        self.tiles.iter().position(|&t| chain.accepts(t))
    }

    /// Per-tile playability against the chain, in hand order.
    #[must_use]
    pub fn playable_mask(&self, chain: &Chain) -> Vec<bool> {
        self.tiles.iter().map(|&t| chain.accepts(t)).collect()
    }

    /// Empty the hand, returning its tiles in order.
    pub fn take_all(&mut self) -> Vec<Tile> {
        self.tiles.drain(..).collect()
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
