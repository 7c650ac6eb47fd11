//! Opponent move selection.
//!
//! The opponent is rule-driven, not strategic. `OpponentPolicy` is the
//! seam; `FirstFit` is the policy the engine uses by default.

use crate::zones::{Chain, Hand};

/// Chooses which hand tile the opponent plays.
pub trait OpponentPolicy {
    /// Pick a hand index to play, or `None` to draw.
    ///
    /// A returned index must be playable on `chain`; the engine treats
    /// anything else as no choice.
    fn choose(&self, hand: &Hand, chain: &Chain) -> Option<usize>;
}

/// Play the first playable tile in hand order.
///
/// No look-ahead and no pip preferences, so the opponent is fully
/// determined by the deal.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFit;

impl OpponentPolicy for FirstFit {
    fn choose(&self, hand: &Hand, chain: &Chain) -> Option<usize> {
        hand.first_playable(chain)
    }
}
