//! The match engine: one owned game with an explicit lifecycle.
//!
//! The engine never waits. A mismatched pair stays face up until the caller
//! invokes `resolve_mismatch`, so any UI timer (or a headless test) decides
//! how long the cards are shown.
//!
//! ## Example
//!
//! ```
//! use memory_match::core::{GameConfig, Player};
//! use memory_match::rules::MatchEngine;
//!
//! let mut engine = MatchEngine::new(GameConfig::small().with_seed(1)).unwrap();
//!
//! let first = 0;
//! let token = engine.token(first).unwrap();
//! let second = (1..engine.len())
//!     .find(|&i| engine.token(i).unwrap() == token)
//!     .unwrap();
//!
//! engine.select_slot(first).unwrap();
//! let outcome = engine.select_slot(second).unwrap();
//!
//! assert!(outcome.is_match());
//! assert_eq!(engine.score(Player::One), 1);
//! ```

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::history::TurnRecord;
use super::phase::{GameResult, Phase, Resolution, SelectOutcome};
use super::view::BoardView;
use crate::cards::{Deck, Slot, Token};
use crate::core::{
    EngineError, EngineResult, GameConfig, GameRng, IllegalOperation, Player, Scores,
};

const DEAL_STREAM: &str = "deal";
const RESHUFFLE_STREAM: &str = "reshuffle";

/// A two-player memory game.
///
/// Owns the deck, the current selection, scores and turn history.
/// All operations are immediate state transitions; rejected calls leave the
/// engine unchanged.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: GameConfig,
    deck: Deck,
    /// Distinct tokens dealt; `deck.len()` is always twice this.
    pairs: u32,
    /// Face-up, unmatched slots in the order they were turned.
    selection: SmallVec<[usize; 2]>,
    scores: Scores,
    current: Player,
    pairs_found: usize,
    turn: u32,
    history: Vector<TurnRecord>,
    /// Seed of the current deal.
    seed: u64,
    /// Source of restart seeds.
    rng: GameRng,
    reshuffle_rng: GameRng,
}

impl MatchEngine {
    /// Start a game.
    ///
    /// Fails with `InvalidConfiguration` if the size is odd, zero or too
    /// large to name every pair.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        let pairs = config.token_count()?;
        let seed = config.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        Ok(Self::deal(config, pairs, seed))
    }

    /// Replace the current game with a fresh deal.
    ///
    /// Scores, selection, pairs found and history all reset. On error the
    /// current game is kept.
    pub fn new_game(&mut self, config: GameConfig) -> EngineResult<()> {
        let pairs = match config.token_count() {
            Ok(pairs) => pairs,
            Err(err) => {
                debug!(%err, "new game rejected");
                return Err(err);
            }
        };
        let seed = config.seed.unwrap_or_else(|| self.rng.next_seed());
        *self = Self::deal(config, pairs, seed);
        Ok(())
    }

    /// Start over with the same size and mode.
    ///
    /// The new deal is drawn from this game's seed stream, so a seeded
    /// game restarts reproducibly but never repeats the same deal.
    pub fn restart(&mut self) {
        let seed = self.rng.next_seed();
        *self = Self::deal(self.config, self.pairs, seed);
    }

    fn deal(config: GameConfig, pairs: u32, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let deck = Deck::deal(pairs, &mut rng.for_context(DEAL_STREAM));
        let reshuffle_rng = rng.for_context(RESHUFFLE_STREAM);

        debug!(size = config.size, mode = ?config.mode, seed, "new game dealt");

        Self {
            config,
            deck,
            pairs,
            selection: SmallVec::new(),
            scores: Scores::default(),
            current: Player::One,
            pairs_found: 0,
            turn: 1,
            history: Vector::new(),
            seed,
            rng,
            reshuffle_rng,
        }
    }

    // === Operations ===

    /// Turn a card face up.
    ///
    /// Rejected without effect if the index is out of range, the game is
    /// over, a mismatch is waiting to be resolved, or the slot is already
    /// face up or matched. A second card that matches the first is scored
    /// for the current player, who keeps the turn.
    pub fn select_slot(&mut self, index: usize) -> EngineResult<SelectOutcome> {
        if let Err(err) = self.check_selectable(index) {
            debug!(index, %err, "selection rejected");
            return Err(err);
        }

        if let Some(slot) = self.deck.get_mut(index) {
            slot.flip_up();
        }
        self.selection.push(index);
        trace!(index, player = %self.current, "slot flipped");

        let (first, second) = match self.selection.as_slice() {
            &[first, second] => (first, second),
            _ => return Ok(SelectOutcome::Flipped { index }),
        };

        let token = self.deck.slots()[first].token();
        if token != self.deck.slots()[second].token() {
            debug!(first, second, player = %self.current, "mismatch pending");
            return Ok(SelectOutcome::Mismatched { first, second });
        }

        for idx in [first, second] {
            if let Some(slot) = self.deck.get_mut(idx) {
                slot.mark_matched();
            }
        }
        self.scores[self.current] += 1;
        self.pairs_found += 1;
        self.selection.clear();
        self.record_turn(first, second, true);

        debug!(
            first,
            second,
            %token,
            player = %self.current,
            pairs_found = self.pairs_found,
            "pair matched"
        );

        if self.is_game_over() {
            info!(
                player_one = self.scores[Player::One],
                player_two = self.scores[Player::Two],
                result = ?self.result(),
                "game over"
            );
        }

        Ok(SelectOutcome::Matched {
            first,
            second,
            token,
        })
    }

    fn check_selectable(&self, index: usize) -> EngineResult<()> {
        let slot = self.slot(index)?;
        if self.is_game_over() {
            return Err(IllegalOperation::GameOver.into());
        }
        if self.selection.len() >= 2 {
            return Err(IllegalOperation::ResolutionPending.into());
        }
        if !slot.is_hidden() {
            return Err(IllegalOperation::SlotUnavailable { index }.into());
        }
        Ok(())
    }

    /// Turn a mismatched pair back down and pass the turn.
    ///
    /// In hard mode every face-down, unmatched card (including the two just
    /// turned back) is then reshuffled among its own positions.
    pub fn resolve_mismatch(&mut self) -> EngineResult<Resolution> {
        let (first, second) = match self.selection.as_slice() {
            &[first, second] => (first, second),
            _ => {
                let err = EngineError::from(IllegalOperation::NoPendingMismatch);
                debug!(%err, "resolve rejected");
                return Err(err);
            }
        };

        for idx in [first, second] {
            if let Some(slot) = self.deck.get_mut(idx) {
                slot.flip_down();
            }
        }
        self.selection.clear();
        self.record_turn(first, second, false);
        self.current = self.current.other();

        let reshuffled = if self.config.mode.reshuffles() {
            self.deck.reshuffle_hidden(&mut self.reshuffle_rng)
        } else {
            Vec::new()
        };

        debug!(
            first,
            second,
            next_player = %self.current,
            reshuffled = reshuffled.len(),
            "mismatch resolved"
        );

        Ok(Resolution {
            flipped_back: [first, second],
            next_player: self.current,
            reshuffled,
        })
    }

    fn record_turn(&mut self, first: usize, second: usize, matched: bool) {
        self.history
            .push_back(TurnRecord::new(self.turn, self.current, first, second, matched));
        self.turn = self.turn.saturating_add(1);
    }

    // === Queries ===

    /// True once every pair has been found.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.pairs_found == self.total_pairs()
    }

    /// Winner or draw, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        Some(match self.scores.leader() {
            Some(player) => GameResult::Winner(player),
            None => GameResult::Draw,
        })
    }

    /// Current phase of the turn.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            return Phase::GameOver;
        }
        match self.selection.len() {
            0 => Phase::Idle,
            1 => Phase::OneSelected,
            _ => Phase::MismatchPending,
        }
    }

    /// Get a slot by index.
    pub fn slot(&self, index: usize) -> EngineResult<&Slot> {
        self.deck.get(index).ok_or(EngineError::InvalidIndex {
            index,
            len: self.deck.len(),
        })
    }

    /// The token dealt to a slot, whether or not it is showing.
    pub fn token(&self, index: usize) -> EngineResult<Token> {
        self.slot(index).map(Slot::token)
    }

    /// Is a slot face up?
    pub fn is_face_up(&self, index: usize) -> EngineResult<bool> {
        self.slot(index).map(Slot::is_face_up)
    }

    /// Has a slot been paired?
    pub fn is_matched(&self, index: usize) -> EngineResult<bool> {
        self.slot(index).map(Slot::is_matched)
    }

    /// Indices `select_slot` would currently accept.
    #[must_use]
    pub fn legal_slots(&self) -> Vec<usize> {
        match self.phase() {
            Phase::Idle | Phase::OneSelected => self.deck.hidden_positions(),
            Phase::MismatchPending | Phase::GameOver => Vec::new(),
        }
    }

    /// Pairs won by a player.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player]
    }

    /// Both players' scores.
    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Pairs found so far by either player.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.len() / 2
    }

    /// Face-up, unmatched slots in the order they were turned.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Number of slots on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Always false: a valid board has at least one pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// The dealt board.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Configuration of the current game.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the current deal; replays it via `GameConfig::with_seed`.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of the turn in progress, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Resolved turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Read-only snapshot for renderers; hidden tokens are withheld.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_engine(self)
    }
}
