//! The board: dealing pairs and reshuffling hidden cards.
//!
//! A `Deck` is the ordered sequence of slots the presentation layer lays
//! out on the grid. It is dealt once per game and afterwards only changes
//! through slot flags and hard-mode reshuffles of hidden slots.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::slot::Slot;
use super::token::Token;
use crate::core::rng::GameRng;

/// Ordered slots of one game.
///
/// ## Usage
///
/// ```
/// use memory_match::cards::Deck;
/// use memory_match::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let deck = Deck::deal(8, &mut rng);
///
/// assert_eq!(deck.len(), 16);
/// assert!(deck.pair_counts().values().all(|&n| n == 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    slots: Vec<Slot>,
}

impl Deck {
    /// Deal `pair_count` pairs face down in uniformly random order.
    #[must_use]
    pub fn deal(pair_count: u32, rng: &mut GameRng) -> Self {
        let mut slots: Vec<Slot> = (0..pair_count)
            .flat_map(|id| [Slot::new(Token::new(id)), Slot::new(Token::new(id))])
            .collect();
        rng.shuffle(&mut slots);
        Self { slots }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get a slot by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// All slots in board order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterate over (index, slot) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate()
    }

    /// How many slots carry each token.
    #[must_use]
    pub fn pair_counts(&self) -> FxHashMap<Token, usize> {
        let mut counts = FxHashMap::default();
        for slot in &self.slots {
            *counts.entry(slot.token()).or_insert(0) += 1;
        }
        counts
    }

    /// Indices of face-down, unmatched slots.
    #[must_use]
    pub fn hidden_positions(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, slot)| slot.is_hidden())
            .map(|(index, _)| index)
            .collect()
    }

    /// Permute the cards among hidden positions.
    ///
    /// Face-up and matched slots keep their position. Returns the positions
    /// that took part, in ascending order.
    pub fn reshuffle_hidden(&mut self, rng: &mut GameRng) -> Vec<usize> {
        let positions = self.hidden_positions();
        if positions.len() < 2 {
            return positions;
        }

        let mut cards: Vec<Slot> = positions.iter().map(|&i| self.slots[i]).collect();
        rng.shuffle(&mut cards);

        for (&index, card) in positions.iter().zip(cards) {
            self.slots[index] = card;
        }

        positions
    }
}
