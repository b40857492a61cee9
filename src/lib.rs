//! # memory-match
//!
//! A headless engine for the two-player memory matching game.
//!
//! ## Design Principles
//!
//! 1. **Toolkit-Agnostic**: Cards are plain records. A presentation layer
//!    maps slot indices to widgets and forwards clicks as `select_slot`.
//!
//! 2. **Explicit Timing**: A mismatch stays face up until the caller invokes
//!    `resolve_mismatch`, so UI timers and headless tests drive the pace.
//!
//! 3. **Owned State**: One `MatchEngine` per game with an explicit
//!    lifecycle (`new`, `new_game`, `restart`); no globals.
//!
//! 4. **Deterministic**: Every deal and hard-mode reshuffle comes from a
//!    recorded seed.
//!
//! ## Modules
//!
//! - `core`: Players, scores, configuration, errors, RNG
//! - `cards`: Tokens, slots and the dealt deck
//! - `rules`: The match engine, phases, history and board view

pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult, GameConfig, GameRng, GameRngState, IllegalOperation, Mode, Player,
    Scores,
};

pub use crate::cards::{Deck, Slot, Token};

pub use crate::rules::{
    BoardView, GameResult, MatchEngine, Phase, Resolution, SelectOutcome, SlotView, TurnRecord,
};
