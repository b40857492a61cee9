//! Core engine types: players, scores, configuration, errors, RNG.
//!
//! These building blocks know nothing about cards or turns; the `cards`
//! and `rules` modules are built on top of them.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, Mode};
pub use error::{EngineError, EngineResult, IllegalOperation};
pub use player::{Player, Scores};
pub use rng::{GameRng, GameRngState};
