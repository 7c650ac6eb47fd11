//! Unordered and oriented tiles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::TileError;

/// Highest pip value in the double-six set.
pub const MAX_PIP: u8 = 6;

/// A tile as held in a hand or the stock.
///
/// The pips keep the order they were created with, which is the order the
/// placement table reads them in. Equality and hashing ignore that order:
/// `[2|4]` and `[4|2]` are the same tile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Tile {
    a: u8,
    b: u8,
}

impl Tile {
    /// Create a tile.
    ///
    /// Panics if either pip exceeds 6; use `try_new` for untrusted input.
    #[must_use]
    pub fn new(a: u8, b: u8) -> Self {
        assert!(a <= MAX_PIP && b <= MAX_PIP, "Pip out of range: {a}-{b}");
        Self { a, b }
    }

    /// Create a tile, rejecting pips above 6.
    pub fn try_new(a: u8, b: u8) -> Result<Self, TileError> {
        if a > MAX_PIP || b > MAX_PIP {
            return Err(TileError::PipOutOfRange(a, b));
        }
        Ok(Self { a, b })
    }

    /// The pips in creation order.
    #[inline]
    #[must_use]
    pub fn pips(self) -> (u8, u8) {
        (self.a, self.b)
    }

    #[inline]
    #[must_use]
    pub fn is_double(self) -> bool {
        self.a == self.b
    }

    /// Does either pip equal `pip`?
    #[inline]
    #[must_use]
    pub fn has(self, pip: u8) -> bool {
        self.a == pip || self.b == pip
    }

    /// The same tile with its pips swapped.
    #[inline]
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// The natural orientation: first pip on the left.
    #[inline]
    #[must_use]
    pub fn oriented(self) -> OrientedTile {
        OrientedTile::new(self.a, self.b)
    }

    /// Dense index of the unordered tile, 0..28.
    ///
    /// `[0|0]` is 0, `[1|0]` is 1, `[1|1]` is 2, ..., `[6|6]` is 27.
    #[inline]
    #[must_use]
    pub fn id(self) -> u8 {
        let (hi, lo) = self.normalized();
        hi * (hi + 1) / 2 + lo
    }

    #[inline]
    fn normalized(self) -> (u8, u8) {
        if self.a >= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl TryFrom<(u8, u8)> for Tile {
    type Error = TileError;

    fn try_from((a, b): (u8, u8)) -> Result<Self, Self::Error> {
        Tile::try_new(a, b)
    }
}

impl From<Tile> for (u8, u8) {
    fn from(tile: Tile) -> Self {
        tile.pips()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.a, self.b)
    }
}

/// Accepts `"3|5"`, `"3-5"`, `"[3|5]"` and `"35"`. Pip order is kept.
impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | ' '))
            .collect();
        let bad = || TileError::Parse(s.to_string());

        let (a, b) = match t.split_once(['|', '-', ',']) {
            Some((a, b)) => (
                a.parse::<u8>().map_err(|_| bad())?,
                b.parse::<u8>().map_err(|_| bad())?,
            ),
            None if t.len() == 2 && t.bytes().all(|c| c.is_ascii_digit()) => {
                let bytes = t.as_bytes();
                (bytes[0] - b'0', bytes[1] - b'0')
            }
            None => return Err(bad()),
        };
        Tile::try_new(a, b)
    }
}

/// A tile as laid on the chain, with a distinguished left and right pip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrientedTile {
    pub left: u8,
    pub right: u8,
}

impl OrientedTile {
    #[must_use]
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// Forget the orientation.
    #[must_use]
    pub fn tile(self) -> Tile {
        Tile::new(self.left, self.right)
    }
}

impl fmt::Display for OrientedTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(t: Tile) -> u64 {
        let mut h = DefaultHasher::new();
        t.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_unordered_equality() {
        assert_eq!(Tile::new(2, 4), Tile::new(4, 2));
        assert_ne!(Tile::new(2, 4), Tile::new(2, 5));
        assert_eq!(hash_of(Tile::new(2, 4)), hash_of(Tile::new(4, 2)));
    }

    #[test]
    fn test_oriented_equality() {
        assert_ne!(Tile::new(2, 4).oriented(), Tile::new(4, 2).oriented());
        assert_eq!(Tile::new(2, 4).flipped().oriented(), OrientedTile::new(4, 2));
    }

    #[test]
    fn test_pips_and_double() {
        let t = Tile::new(3, 5);
        assert_eq!(t.pips(), (3, 5));
        assert_eq!(t.flipped().pips(), (5, 3));
        assert!(!t.is_double());
        assert!(Tile::new(6, 6).is_double());
        assert!(t.has(3) && t.has(5) && !t.has(4));
    }

    #[test]
    fn test_ids_are_dense() {
        assert_eq!(Tile::new(0, 0).id(), 0);
        assert_eq!(Tile::new(0, 1).id(), 1);
        assert_eq!(Tile::new(1, 1).id(), 2);
        assert_eq!(Tile::new(5, 6).id(), 26);
        assert_eq!(Tile::new(6, 6).id(), 27);
        assert_eq!(Tile::new(2, 4).id(), Tile::new(4, 2).id());
    }

    #[test]
    fn test_try_new_range() {
        assert_eq!(Tile::try_new(7, 1), Err(TileError::PipOutOfRange(7, 1)));
        assert!(Tile::try_new(6, 0).is_ok());
    }

    #[test]
    #[should_panic(expected = "Pip out of range")]
    fn test_new_panics_out_of_range() {
        let _ = Tile::new(0, 9);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3|5".parse::<Tile>().unwrap().pips(), (3, 5));
        assert_eq!("[5-3]".parse::<Tile>().unwrap().pips(), (5, 3));
        assert_eq!("06".parse::<Tile>().unwrap().pips(), (0, 6));
        assert!("x|1".parse::<Tile>().is_err());
        assert!("7|1".parse::<Tile>().is_err());
        assert!("123".parse::<Tile>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(3, 5).to_string(), "[3|5]");
        assert_eq!(OrientedTile::new(5, 3).to_string(), "[5|3]");
    }

    #[test]
    fn test_serde_rejects_bad_pips() {
        let t: Tile = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(t.pips(), (1, 2));
        assert!(serde_json::from_str::<Tile>("[1,9]").is_err());
        assert_eq!(serde_json::to_string(&Tile::new(4, 0)).unwrap(), "[4,0]");
    }
}
