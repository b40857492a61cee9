//! Turn phases and operation outcomes.
//!
//! ```text
//! Idle ──select──▶ OneSelected ──select──┬─▶ (match) ──▶ Idle | GameOver
//!                                        └─▶ MismatchPending ──resolve_mismatch──▶ Idle
//! ```
//!
//! Two selected cards that match are resolved inside `select_slot`, so
//! "two selected" is only observable as `MismatchPending`.

use serde::{Deserialize, Serialize};

use crate::cards::Token;
use crate::core::Player;

/// Where the engine is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card selected.
    Idle,
    /// One card face up, waiting for the second.
    OneSelected,
    /// Two different cards face up, waiting for `resolve_mismatch`.
    MismatchPending,
    /// Every pair found.
    GameOver,
}

impl Phase {
    /// Number of selected cards in this phase.
    #[must_use]
    pub const fn selection_len(self) -> usize {
        match self {
            Phase::Idle | Phase::GameOver => 0,
            Phase::OneSelected => 1,
            Phase::MismatchPending => 2,
        }
    }
}

/// What a successful `select_slot` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First card of the turn turned over.
    Flipped { index: usize },
    /// Second card completed a pair; both stay face up.
    Matched {
        first: usize,
        second: usize,
        token: Token,
    },
    /// Second card differs; call `resolve_mismatch` when ready.
    Mismatched { first: usize, second: usize },
}

impl SelectOutcome {
    /// Did this selection complete a pair?
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. })
    }

    /// Is the caller now expected to call `resolve_mismatch`?
    #[must_use]
    pub const fn needs_resolution(&self) -> bool {
        matches!(self, SelectOutcome::Mismatched { .. })
    }
}

/// What `resolve_mismatch` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The two cards turned back down.
    pub flipped_back: [usize; 2],
    /// Whose turn it is now.
    pub next_player: Player,
    /// Positions that took part in a hard-mode reshuffle. Empty in normal mode.
    pub reshuffled: Vec<usize>,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player found more pairs.
    Winner(Player),
    /// Both players found the same number of pairs.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
