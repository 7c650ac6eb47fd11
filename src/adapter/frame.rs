//! Read-only snapshot of what a front-end may render.

use std::fmt;

use serde::Serialize;

use super::Outcome;
use crate::core::Side;
use crate::rules::Engine;
use crate::tiles::{OrientedTile, Tile};

/// A player tile with its playability flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HandTile {
    pub tile: Tile,
    pub playable: bool,
}

/// Everything observable by the player at one moment.
///
/// The opponent's tiles and the stock order are deliberately absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Chain tiles, left to right.
    pub chain: Vec<OrientedTile>,
    pub endpoints: Option<(u8, u8)>,
    /// Player hand in display order.
    pub hand: Vec<HandTile>,
    pub opponent_hand_size: usize,
    pub stock_size: usize,
    pub to_move: Side,
    /// Outcomes of the last intent.
    pub outcomes: Vec<Outcome>,
    pub winner: Option<Side>,
    pub seed: u64,
}

impl Frame {
    /// Capture the engine's observable state.
    #[must_use]
    pub fn capture(engine: &Engine, outcomes: &[Outcome]) -> Self {
        let hand = engine
            .hand(Side::Player)
            .tiles()
            .iter()
            .zip(engine.playable(Side::Player))
            .map(|(&tile, playable)| HandTile { tile, playable })
            .collect();

        Self {
            chain: engine.chain().iter().copied().collect(),
            endpoints: engine.chain().endpoints(),
            hand,
            opponent_hand_size: engine.hand(Side::Opponent).len(),
            stock_size: engine.stock_size(),
            to_move: engine.to_move(),
            outcomes: outcomes.to_vec(),
            winner: engine.winner(),
            seed: engine.seed(),
        }
    }
}

/// Plain-text rendering. Playable hand tiles are marked with `*`.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome.message())?;
        }

        write!(f, "Board:")?;
        if self.chain.is_empty() {
            write!(f, " (empty)")?;
        }
        for tile in &self.chain {
            write!(f, " {tile}")?;
        }
        writeln!(f)?;

        write!(f, "Your hand:")?;
        for (i, t) in self.hand.iter().enumerate() {
            let mark = if t.playable { "*" } else { "" };
            write!(f, " {i}:{}{mark}", t.tile)?;
        }
        writeln!(f)?;

        write!(
            f,
            "Opponent holds {}, stock {}",
            self.opponent_hand_size, self.stock_size
        )?;
        if let Some(side) = self.winner {
            write!(f, "\n{side} has emptied their hand.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_hides_opponent_tiles() {
        let engine = Engine::builder()
            .chain([(3, 5)])
            .player_hand([(0, 1), (5, 6)])
            .opponent_hand([(2, 2), (4, 4), (1, 1)])
            .stock([(6, 6)])
            .seed(4)
            .build()
            .unwrap();

        let frame = Frame::capture(&engine, &[]);
        assert_eq!(frame.chain, vec![OrientedTile::new(3, 5)]);
        assert_eq!(frame.endpoints, Some((3, 5)));
        assert_eq!(
            frame.hand,
            vec![
                HandTile { tile: Tile::new(0, 1), playable: false },
                HandTile { tile: Tile::new(5, 6), playable: true },
            ]
        );
        assert_eq!(frame.opponent_hand_size, 3);
        assert_eq!(frame.stock_size, 1);
        assert_eq!(frame.winner, None);
        assert_eq!(frame.seed, 4);
    }

    #[test]
    fn test_text_rendering() {
        let engine = Engine::builder()
            .chain([(3, 5)])
            .player_hand([(0, 1), (5, 6)])
            .opponent_hand([(2, 2)])
            .build()
            .unwrap();

        let text = Frame::capture(&engine, &[Outcome::IllegalMove]).to_string();
        assert_eq!(
            text,
            "Invalid move! Try another piece.\n\
             Board: [3|5]\n\
             Your hand: 0:[0|1] 1:[5|6]*\n\
             Opponent holds 1, stock 0"
        );
    }

    #[test]
    fn test_json_shape() {
        let engine = Engine::builder().player_hand([(1, 2)]).build().unwrap();
        let json = serde_json::to_value(Frame::capture(&engine, &[Outcome::Ok])).unwrap();

        assert_eq!(json["hand"][0]["tile"], serde_json::json!([1, 2]));
        assert_eq!(json["hand"][0]["playable"], serde_json::json!(true));
        assert_eq!(json["to_move"], serde_json::json!("Player"));
        assert_eq!(json["outcomes"], serde_json::json!(["Ok"]));
        assert_eq!(json["winner"], serde_json::json!("Opponent"));
    }
}
