//! Turn rules: the match engine and its state machine.
//!
//! - `MatchEngine`: owns one game and applies `select_slot` / `resolve_mismatch`
//! - `Phase`: where the engine is within a turn
//! - `TurnRecord`: history of resolved turns
//! - `BoardView`: renderer-facing snapshot

pub mod engine;
pub mod history;
pub mod phase;
pub mod view;

pub use engine::MatchEngine;
pub use history::TurnRecord;
pub use phase::{GameResult, Phase, Resolution, SelectOutcome};
pub use view::{BoardView, SlotView};
