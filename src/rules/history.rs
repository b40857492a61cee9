//! Record of resolved turns.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// One completed turn: two cards turned over by one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Who played the turn.
    pub player: Player,
    /// First card turned over.
    pub first: usize,
    /// Second card turned over.
    pub second: usize,
    /// Whether the two cards formed a pair.
    pub matched: bool,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(turn: u32, player: Player, first: usize, second: usize, matched: bool) -> Self {
        Self {
            turn,
            player,
            first,
            second,
            matched,
        }
    }
}
