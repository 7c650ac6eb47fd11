//! Tiles of the double-six set.
//!
//! A `Tile` is the unordered pair held in hands and the stock. Once laid on
//! the chain it becomes an `OrientedTile` with a left and a right pip.

mod set;
mod tile;

pub use set::{double_six, TILE_COUNT};
pub use tile::{OrientedTile, Tile, MAX_PIP};
