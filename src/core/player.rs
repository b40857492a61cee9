//! Player seats and per-player scores.
//!
//! ## Player
//!
//! The game is always played by two seats, numbered 1 and 2 for display.
//!
//! ## Scores
//!
//! One pair counter per seat with O(1) access, indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The player who opens every game.
    #[default]
    One,
    /// The second player.
    Two,
}

impl Player {
    /// Both seats in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The display number of this seat (1 or 2).
    ///
    /// ```
    /// use memory_match::core::Player;
    ///
    /// assert_eq!(Player::One.number(), 1);
    /// assert_eq!(Player::Two.number(), 2);
    /// ```
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The seat whose turn comes next.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Look up a seat by display number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Pairs won by each player.
///
/// ```
/// use memory_match::core::{Player, Scores};
///
/// let mut scores = Scores::default();
/// scores[Player::Two] += 1;
///
/// assert_eq!(scores[Player::One], 0);
/// assert_eq!(scores[Player::Two], 1);
/// assert_eq!(scores.total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    pairs: [u32; 2],
}

impl Scores {
    /// Pairs won by a player.
    #[must_use]
    pub fn get(&self, player: Player) -> u32 {
        self.pairs[player.index()]
    }

    /// Sum over both players.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pairs.iter().sum()
    }

    /// The player with strictly more pairs, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Player> {
        let one = self.get(Player::One);
        let two = self.get(Player::Two);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Iterate over (Player, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

impl Index<Player> for Scores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.pairs[player.index()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.pairs[player.index()]
    }
}
