//! Match configuration.
//!
//! The only tunables are the deal size and the RNG seed. The tile set is
//! always double-six; alternate rule variants are not configurable.

use serde::{Deserialize, Serialize};

/// Tiles dealt to each side at the start of a match and after a
/// redistribution.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Largest deal that leaves room for both hands.
pub const MAX_HAND_SIZE: usize = crate::tiles::TILE_COUNT / 2;

/// Complete match configuration.
///
/// `Engine::with_config` rejects a hand size above `MAX_HAND_SIZE`, however
/// the config was built.
///
/// ```
/// use dominoes::core::GameConfig;
///
/// let config = GameConfig::new().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.hand_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tiles dealt to each side.
    pub hand_size: usize,

    /// Shuffle seed. `None` draws one from entropy at engine creation.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (5-tile hands, entropy seed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the deal size.
    ///
    /// Both hands are dealt from the same 28 tiles, so at most 14 each.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size <= MAX_HAND_SIZE, "Hand size must leave room for both hands");
        self.hand_size = size;
        self
    }
}
