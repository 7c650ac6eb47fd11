//! The double-six tile set.

use super::tile::{Tile, MAX_PIP};

/// Number of distinct tiles in the double-six set.
pub const TILE_COUNT: usize = 28;

/// All 28 tiles `{(i, j) | 0 <= i <= j <= 6}` in ascending order.
#[must_use]
pub fn double_six() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    for i in 0..=MAX_PIP {
        for j in i..=MAX_PIP {
            tiles.push(Tile::new(i, j));
        }
    }
    tiles
}
