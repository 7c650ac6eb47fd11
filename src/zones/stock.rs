//! The face-down reserve.
//!
//! Draws take the front tile. The stock only shrinks, except when a
//! stalemate redistribution deals it afresh.

use im::Vector;

use crate::core::GameRng;
use crate::tiles::Tile;

/// Remaining undealt tiles, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stock {
    tiles: Vector<Tile>,
}

impl Stock {
    /// Shuffle `tiles` and keep them as the stock.
    #[must_use]
    pub fn shuffled(mut tiles: Vec<Tile>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut tiles);
        tiles.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remove and return the next tile.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Remove and return up to `n` tiles from the front.
    pub fn deal(&mut self, n: usize) -> Vec<Tile> {
        let n = n.min(self.tiles.len());
        let rest = self.tiles.split_off(n);
        let dealt = std::mem::replace(&mut self.tiles, rest);
        dealt.into_iter().collect()
    }

    /// Empty the stock, returning its tiles in draw order.
    pub fn take_all(&mut self) -> Vec<Tile> {
        std::mem::take(&mut self.tiles).into_iter().collect()
    }

    /// Tiles in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }
}

impl FromIterator<Tile> for Stock {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::double_six;

    #[test]
    fn test_draw_from_front() {
        let mut stock: Stock = [Tile::new(5, 6), Tile::new(2, 4)].into_iter().collect();

        assert_eq!(stock.draw(), Some(Tile::new(5, 6)));
        assert_eq!(stock.draw(), Some(Tile::new(2, 4)));
        assert_eq!(stock.draw(), None);
        assert!(stock.is_empty());
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        let a = Stock::shuffled(double_six(), &mut GameRng::new(42));
        let b = Stock::shuffled(double_six(), &mut GameRng::new(42));
        let c = Stock::shuffled(double_six(), &mut GameRng::new(43));

        assert_eq!(a.len(), 28);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deal() {
        let mut stock = Stock::shuffled(double_six(), &mut GameRng::new(1));
        let first: Vec<Tile> = stock.iter().take(5).copied().collect();

        let dealt = stock.deal(5);
        assert_eq!(dealt, first);
        assert_eq!(stock.len(), 23);

        let rest = stock.deal(100);
        assert_eq!(rest.len(), 23);
        assert!(stock.is_empty());
    }

    #[test]
    fn test_take_all() {
        let mut stock: Stock = double_six().into_iter().collect();
        assert_eq!(stock.take_all(), double_six());
        assert_eq!(stock.len(), 0);
    }
}
