//! Placement policy: which end a tile joins and which way it faces.
//!
//! Given endpoints `(L, R)` and a hand tile with pips `(a, b)`, the first
//! matching row wins:
//!
//! | condition   | result                      |
//! |-------------|-----------------------------|
//! | chain empty | `(a, b)` as the sole tile   |
//! | `b == L`    | prepend `(a, b)`            |
//! | `a == L`    | prepend `(b, a)`            |
//! | `a == R`    | append `(a, b)`             |
//! | `b == R`    | append `(b, a)`             |
//!
//! The left end is always tried first, so a tile that fits both ends goes
//! left.

use serde::{Deserialize, Serialize};

use crate::tiles::{OrientedTile, Tile};
use crate::zones::{Attach, Chain};

/// A resolved play: the hand tile, how it faces, and where it goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The tile as it was held.
    pub tile: Tile,
    /// The tile as it lies on the chain.
    pub oriented: OrientedTile,
    /// The end it joins.
    pub at: Attach,
}

/// Resolve where `tile` would go, or `None` if it matches neither end.
#[must_use]
pub fn place(chain: &Chain, tile: Tile) -> Option<Placement> {
    let (a, b) = tile.pips();
    let (at, oriented) = match chain.endpoints() {
        None => (Attach::Opening, tile.oriented()),
        Some((l, _)) if b == l => (Attach::Left, tile.oriented()),
        Some((l, _)) if a == l => (Attach::Left, tile.flipped().oriented()),
        Some((_, r)) if a == r => (Attach::Right, tile.oriented()),
        Some((_, r)) if b == r => (Attach::Right, tile.flipped().oriented()),
        Some(_) => return None,
    };
    Some(Placement { tile, oriented, at })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(tiles: &[(u8, u8)]) -> Chain {
        let mut chain = Chain::new();
        let mut iter = tiles.iter();
        if let Some(&(a, b)) = iter.next() {
            chain.first_play(Tile::new(a, b)).unwrap();
        }
        for &(l, r) in iter {
            chain.append_right(OrientedTile::new(l, r)).unwrap();
        }
        chain
    }

    #[test]
    fn test_opening() {
        let p = place(&Chain::new(), Tile::new(3, 5)).unwrap();
        assert_eq!(p.at, Attach::Opening);
        assert_eq!(p.oriented, OrientedTile::new(3, 5));
    }

    #[test]
    fn test_left_without_flip() {
        let p = place(&chain(&[(3, 5)]), Tile::new(2, 3)).unwrap();
        assert_eq!(p.at, Attach::Left);
        assert_eq!(p.oriented, OrientedTile::new(2, 3));
    }

    #[test]
    fn test_left_with_flip() {
        let p = place(&chain(&[(3, 5)]), Tile::new(3, 4)).unwrap();
        assert_eq!(p.at, Attach::Left);
        assert_eq!(p.oriented, OrientedTile::new(4, 3));
    }

    #[test]
    fn test_right_without_flip() {
        let p = place(&chain(&[(3, 5)]), Tile::new(5, 6)).unwrap();
        assert_eq!(p.at, Attach::Right);
        assert_eq!(p.oriented, OrientedTile::new(5, 6));
    }

    #[test]
    fn test_right_with_flip() {
        let p = place(&chain(&[(3, 5)]), Tile::new(6, 5)).unwrap();
        assert_eq!(p.at, Attach::Right);
        assert_eq!(p.oriented, OrientedTile::new(5, 6));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(place(&chain(&[(3, 5)]), Tile::new(0, 1)), None);
    }

    #[test]
    fn test_left_wins_tie() {
        // [3|5] fits both ends of a 5..3 chain; the left end takes it.
        let p = place(&chain(&[(5, 1), (1, 3)]), Tile::new(3, 5)).unwrap();
        assert_eq!(p.at, Attach::Left);
        assert_eq!(p.oriented, OrientedTile::new(3, 5));
    }

    #[test]
    fn test_double_on_left_end() {
        let p = place(&chain(&[(3, 5)]), Tile::new(3, 3)).unwrap();
        assert_eq!(p.at, Attach::Left);
        assert_eq!(p.oriented, OrientedTile::new(3, 3));
    }

    #[test]
    fn test_placement_always_fits() {
        let base = chain(&[(2, 4), (4, 6)]);
        for tile in crate::tiles::double_six() {
            if let Some(p) = place(&base, tile) {
                let mut c = base.clone();
                c.attach(p.at, p.oriented).unwrap();
                assert_eq!(c.first_break(), None);
                assert_eq!(p.oriented.tile(), tile);
            } else {
                assert!(!base.accepts(tile));
            }
        }
    }
}
