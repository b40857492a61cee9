//! Renderer-facing snapshot of a game.
//!
//! `BoardView` is what a presentation layer needs to paint the grid and the
//! scoreboard. Tokens of face-down cards are withheld so the view can be
//! handed to an untrusted client without leaking the layout.

use serde::{Deserialize, Serialize};

use super::engine::MatchEngine;
use super::phase::Phase;
use crate::cards::Token;
use crate::core::{Mode, Player, Scores};

/// One cell of the grid as a player sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub index: usize,
    pub row: usize,
    pub column: usize,
    /// `Some` only while the card is face up.
    pub token: Option<Token>,
    pub face_up: bool,
    pub matched: bool,
}

/// The whole board plus turn and score state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub rows: usize,
    pub columns: usize,
    pub slots: Vec<SlotView>,
    pub scores: Scores,
    pub current_player: Player,
    pub phase: Phase,
    pub pairs_found: usize,
    pub total_pairs: usize,
    pub mode: Mode,
}

impl BoardView {
    /// Snapshot an engine.
    #[must_use]
    pub fn from_engine(engine: &MatchEngine) -> Self {
        let config = engine.config();
        let (rows, columns) = config.grid_dimensions();

        let slots = engine
            .deck()
            .iter()
            .map(|(index, slot)| {
                let (row, column) = config.position(index).unwrap_or((0, index));
                SlotView {
                    index,
                    row,
                    column,
                    token: slot.visible_token(),
                    face_up: slot.is_face_up(),
                    matched: slot.is_matched(),
                }
            })
            .collect();

        Self {
            rows,
            columns,
            slots,
            scores: engine.scores(),
            current_player: engine.current_player(),
            phase: engine.phase(),
            pairs_found: engine.pairs_found(),
            total_pairs: engine.total_pairs(),
            mode: config.mode,
        }
    }

    /// Cells of one grid row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[SlotView] {
        let len = self.slots.len();
        let start = row.checked_mul(self.columns).map_or(len, |start| start.min(len));
        let end = start.saturating_add(self.columns).min(len);
        &self.slots[start..end]
    }
}

/// Plain-text grid: `?` for face-down cards, the token otherwise.
impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.total_pairs.saturating_sub(1).to_string().len();

        for row in 0..self.rows {
            let cells: Vec<String> = self
                .row(row)
                .iter()
                .map(|cell| match cell.token {
                    Some(token) => format!("{:>width$}", token.raw()),
                    None => format!("{:>width$}", "?"),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }

        write!(
            f,
            "{} {} : {} {} | {} to play",
            Player::One,
            self.scores[Player::One],
            self.scores[Player::Two],
            Player::Two,
            self.current_player
        )
    }
}
