//! The match engine.
//!
//! `Engine` owns the chain, both hands and the stock, and is the only
//! thing that mutates them. Views handed out are shared borrows, valid
//! until the next mutation.
//!
//! ## Turn protocol
//!
//! - A play passes the turn to the other side. A play by the side not
//!   to move is refused with `PlayError::NotYourTurn`.
//! - A draw (or redistribution) does not change whose turn it is.
//! - After a player play, exactly one opponent turn runs before the next
//!   player play is accepted. `player_turn` does both.
//! - `opponent_turn` always hands the move back to the player.
//!
//! ## Example
//!
//! ```
//! use dominoes::core::Side;
//! use dominoes::rules::Engine;
//!
//! let mut engine = Engine::with_seed(42);
//! assert_eq!(engine.hand(Side::Player).len(), 5);
//! assert_eq!(engine.stock_size(), 18);
//!
//! // Anything opens an empty chain; the opponent replies at once.
//! let report = engine.player_turn(0).unwrap();
//! assert_eq!(engine.hand(Side::Player).len(), 4);
//! assert_eq!(engine.to_move(), Side::Player);
//! assert_eq!(engine.chain().len(), 1 + report.opponent.played().iter().count());
//! ```

use im::Vector;
use rustc_hash::FxHashSet;

use super::opponent::{FirstFit, OpponentPolicy};
use super::outcome::{DrawOutcome, OpponentOutcome, TurnReport};
use super::placement::{place, Placement};
use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, InvariantViolation, PlayError, SetupError, Side,
    SideMap, DEFAULT_HAND_SIZE, MAX_HAND_SIZE,
};
use crate::tiles::{double_six, Tile};
use crate::zones::{Chain, Hand, Stock};

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct Engine {
    chain: Chain,
    hands: SideMap<Hand>,
    stock: Stock,
    rng: GameRng,
    hand_size: usize,
    to_move: Side,
    /// Every tile in play; conservation is checked against this set.
    universe: FxHashSet<Tile>,
    history: Vector<ActionRecord>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Deal a fresh match from an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::deal(DEFAULT_HAND_SIZE, GameRng::from_entropy())
    }

    /// Deal a fresh, reproducible match.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::deal(DEFAULT_HAND_SIZE, GameRng::new(seed))
    }

    /// Deal a fresh match from a configuration.
    ///
    /// Fails if the hand size leaves no room for both hands.
    pub fn with_config(config: GameConfig) -> Result<Self, SetupError> {
        check_hand_size(config.hand_size)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::deal(config.hand_size, rng))
    }

    /// Shuffle the 28 tiles, deal `hand_size` to the player, then
    /// `hand_size` to the opponent. The rest is the stock.
    fn deal(hand_size: usize, mut rng: GameRng) -> Self {
        let tiles = double_six();
        let universe = tiles.iter().copied().collect();

        let mut stock = Stock::shuffled(tiles, &mut rng);
        let player: Hand = stock.deal(hand_size).into_iter().collect();
        let opponent: Hand = stock.deal(hand_size).into_iter().collect();

        log::debug!(
            "dealt match seed={} hand_size={hand_size} stock={}",
            rng.seed(),
            stock.len()
        );

        let mut hands = SideMap::new(|_| Hand::new());
        hands[Side::Player] = player;
        hands[Side::Opponent] = opponent;

        Self {
            chain: Chain::new(),
            hands,
            stock,
            rng,
            hand_size,
            to_move: Side::Player,
            universe,
            history: Vector::new(),
        }
    }

    /// Start building an arbitrary position.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    // === Views ===

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    #[must_use]
    pub fn stock_size(&self) -> usize {
        self.stock.len()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The seed the deal was shuffled with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Number of tiles in play (28 for a dealt match).
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.universe.len()
    }

    /// Every play, draw and redistribution so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Queries ===

    /// Can `tile` be laid on the chain right now?
    #[must_use]
    pub fn can_play(&self, tile: Tile) -> bool {
        self.chain.accepts(tile)
    }

    /// Does `side` hold any playable tile?
    #[must_use]
    pub fn has_legal_move(&self, side: Side) -> bool {
        self.hands[side].first_playable(&self.chain).is_some()
    }

    /// Per-tile playability of `side`'s hand, in hand order.
    #[must_use]
    pub fn playable(&self, side: Side) -> Vec<bool> {
        self.hands[side].playable_mask(&self.chain)
    }

    /// The side whose hand is empty, player first.
    ///
    /// Observational only: an empty hand never stops play.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| self.hands[side].is_empty())
    }

    // === Operations ===

    /// Play `side`'s tile at `index` onto the chain.
    ///
    /// Only the side to move may play. On error nothing changes.
    pub fn play_from_hand(&mut self, side: Side, index: usize) -> Result<Placement, PlayError> {
        if side != self.to_move {
            return Err(PlayError::NotYourTurn { side });
        }
        self.commit_play(side, index)
    }

    fn commit_play(&mut self, side: Side, index: usize) -> Result<Placement, PlayError> {
        let hand = &self.hands[side];
        let tile = hand.get(index).ok_or(PlayError::BadIndex {
            side,
            index,
            len: hand.len(),
        })?;
        let placement = place(&self.chain, tile).ok_or(PlayError::IllegalMove { tile })?;

        self.chain.attach(placement.at, placement.oriented)?;
        self.hands[side].remove(index);
        self.to_move = side.other();
        self.record(side, Action::Play(placement));

        log::debug!("{side} plays {tile} as {} on {:?}", placement.oriented, placement.at);
        debug_assert_eq!(self.check_invariants(), Ok(()));
        Ok(placement)
    }

    /// Play for the player, then run the opponent's reply.
    pub fn player_turn(&mut self, index: usize) -> Result<TurnReport, PlayError> {
        let player = self.play_from_hand(Side::Player, index)?;
        let opponent = self.opponent_turn();
        Ok(TurnReport { player, opponent })
    }

    /// Run the opponent's turn with first-fit selection.
    pub fn opponent_turn(&mut self) -> OpponentOutcome {
        self.opponent_turn_with(&FirstFit)
    }

    /// Run the opponent's turn with a custom selection policy.
    ///
    /// The opponent keeps drawing until it can play or the stock is empty.
    /// Each pass either plays or shrinks the stock, so this terminates.
    /// The turn always ends with the player to move. Called while the
    /// player is to move, it stands in for the player passing.
    pub fn opponent_turn_with<P>(&mut self, policy: &P) -> OpponentOutcome
    where
        P: OpponentPolicy + ?Sized,
    {
        self.to_move = Side::Opponent;
        let mut draws = 0;
        loop {
            let hand = &self.hands[Side::Opponent];
            let choice = policy
                .choose(hand, &self.chain)
                .filter(|&i| hand.get(i).is_some_and(|t| self.chain.accepts(t)));
            log::trace!("opponent scans {} tiles, choice {choice:?}", hand.len());

            if let Some(index) = choice {
                let played = self.commit_play(Side::Opponent, index);
                debug_assert!(played.is_ok(), "filtered opponent choice refused: {played:?}");
                match played {
                    Ok(placement) => {
                        self.to_move = Side::Player;
                        return OpponentOutcome::Played { placement, draws };
                    }
                    Err(err) => log::error!("opponent choice {index} refused: {err}"),
                }
            }

            if self.draw_into(Side::Opponent).is_none() {
                log::debug!("opponent has no move after {draws} draws");
                self.to_move = Side::Player;
                return OpponentOutcome::NoMove { draws };
            }
            draws += 1;
        }
    }

    /// Ask to draw for `side`.
    ///
    /// Refused while `side` can play. Otherwise draws one tile; with an
    /// empty stock and both sides stuck, redistributes instead.
    pub fn request_draw(&mut self, side: Side) -> DrawOutcome {
        if self.has_legal_move(side) {
            return DrawOutcome::HasLegalMove;
        }
        if let Some(tile) = self.draw_into(side) {
            return DrawOutcome::Drew(tile);
        }
        if !self.has_legal_move(side.other()) {
            self.redistribute(side);
            return DrawOutcome::Redistributed;
        }
        log::info!("{side} is stuck on an empty stock while {} can play", side.other());
        DrawOutcome::DeadlockUnresolved
    }

    /// Verify conservation, disjointness and chain adjacency.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let held = self
            .chain
            .iter()
            .map(|t| t.tile())
            .chain(self.hands.iter().flat_map(|(_, hand)| hand.tiles().iter().copied()))
            .chain(self.stock.iter().copied());

        let mut seen = FxHashSet::default();
        for tile in held {
            if !seen.insert(tile) {
                return Err(InvariantViolation::Duplicated(tile));
            }
        }
        if let Some(&missing) = self.universe.iter().find(|t| !seen.contains(*t)) {
            return Err(InvariantViolation::Missing(missing));
        }
        if seen.len() != self.universe.len() {
            return Err(InvariantViolation::TileCount {
                expected: self.universe.len(),
                found: seen.len(),
            });
        }
        if let Some(at) = self.chain.first_break() {
            return Err(InvariantViolation::Disconnected(at));
        }
        Ok(())
    }

    // === Internals ===

    fn draw_into(&mut self, side: Side) -> Option<Tile> {
        let tile = self.stock.draw()?;
        self.hands[side].push(tile);
        self.record(side, Action::Draw(tile));
        log::debug!("{side} draws {tile}, {} left in stock", self.stock.len());
        Some(tile)
    }

    /// Pool both hands with the stock, reshuffle, and deal again.
    ///
    /// The player is dealt first. With fewer than two hands' worth of
    /// tiles the opponent gets what is left and the stock ends empty.
    fn redistribute(&mut self, requester: Side) {
        let mut pool = Vec::with_capacity(self.universe.len());
        for (_, hand) in self.hands.iter_mut() {
            pool.extend(hand.take_all());
        }
        pool.extend(self.stock.take_all());
        let pooled = pool.len();

        let mut stock = Stock::shuffled(pool, &mut self.rng);
        for side in Side::ALL {
            self.hands[side] = stock.deal(self.hand_size).into_iter().collect();
        }
        self.stock = stock;
        self.record(requester, Action::Redistribute);

        log::info!(
            "stalemate: redistributed {pooled} tiles, stock now {}",
            self.stock.len()
        );
        debug_assert_eq!(self.check_invariants(), Ok(()));
    }

    fn record(&mut self, side: Side, action: Action) {
        let sequence = self.history.len();
        self.history.push_back(ActionRecord::new(side, action, sequence));
    }
}

/// Builder for arbitrary positions: replays, puzzles and tests.
///
/// The tiles given are the whole universe of the built engine; they need
/// not cover the double-six set.
///
/// ```
/// use dominoes::core::Side;
/// use dominoes::rules::Engine;
///
/// let engine = Engine::builder()
///     .chain([(3, 5)])
///     .player_hand([(2, 3)])
///     .stock([(6, 6)])
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.chain().endpoints(), Some((3, 5)));
/// assert!(engine.has_legal_move(Side::Player));
/// assert_eq!(engine.tile_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct EngineBuilder {
    chain: Vec<(u8, u8)>,
    hands: SideMap<Vec<(u8, u8)>>,
    stock: Vec<(u8, u8)>,
    seed: Option<u64>,
    hand_size: usize,
    to_move: Side,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            chain: Vec::new(),
            hands: SideMap::with_default(),
            stock: Vec::new(),
            seed: None,
            hand_size: DEFAULT_HAND_SIZE,
            to_move: Side::Player,
        }
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain tiles left to right, each as `(left, right)`.
    pub fn chain(mut self, tiles: impl IntoIterator<Item = (u8, u8)>) -> Self {
        self.chain = tiles.into_iter().collect();
        self
    }

    pub fn hand(mut self, side: Side, tiles: impl IntoIterator<Item = (u8, u8)>) -> Self {
        self.hands[side] = tiles.into_iter().collect();
        self
    }

    pub fn player_hand(self, tiles: impl IntoIterator<Item = (u8, u8)>) -> Self {
        self.hand(Side::Player, tiles)
    }

    pub fn opponent_hand(self, tiles: impl IntoIterator<Item = (u8, u8)>) -> Self {
        self.hand(Side::Opponent, tiles)
    }

    /// Stock tiles in draw order.
    pub fn stock(mut self, tiles: impl IntoIterator<Item = (u8, u8)>) -> Self {
        self.stock = tiles.into_iter().collect();
        self
    }

    /// Seed for redistribution shuffles.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal size used by redistribution.
    pub fn hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn to_move(mut self, side: Side) -> Self {
        self.to_move = side;
        self
    }

    /// Validate and assemble the engine.
    pub fn build(self) -> Result<Engine, SetupError> {
        check_hand_size(self.hand_size)?;
        let mut universe = FxHashSet::default();
        let mut claim = |(a, b): (u8, u8)| -> Result<Tile, SetupError> {
            let tile = Tile::try_new(a, b)?;
            if !universe.insert(tile) {
                return Err(SetupError::DuplicateTile(tile));
            }
            Ok(tile)
        };

        let mut chain = Chain::new();
        for &pips in &self.chain {
            let tile = claim(pips)?;
            if chain.is_empty() {
                chain.first_play(tile)?;
            } else {
                chain.append_right(tile.oriented())?;
            }
        }

        let mut hands = SideMap::new(|_| Hand::new());
        for side in Side::ALL {
            for &pips in &self.hands[side] {
                hands[side].push(claim(pips)?);
            }
        }

        let stock = self
            .stock
            .iter()
            .map(|&pips| claim(pips))
            .collect::<Result<Stock, _>>()?;

        Ok(Engine {
            chain,
            hands,
            stock,
            rng: self.seed.map_or_else(GameRng::from_entropy, GameRng::new),
            hand_size: self.hand_size,
            to_move: self.to_move,
            universe,
            history: Vector::new(),
        })
    }
}

fn check_hand_size(size: usize) -> Result<(), SetupError> {
    if size > MAX_HAND_SIZE {
        return Err(SetupError::HandSize {
            size,
            max: MAX_HAND_SIZE,
        });
    }
    Ok(())
}
