//! Game configuration types.
//!
//! Hosts configure a game by providing:
//! - `Mode`: the rule variant (normal or hard)
//! - `GameConfig`: board size, mode and an optional seed
//!
//! Configs are plain data; `validate` is the only place size rules live.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Rule variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Cards stay where they were dealt.
    #[default]
    Normal,
    /// Unmatched face-down cards are reshuffled after every mismatch.
    Hard,
}

impl Mode {
    /// Whether mismatches trigger a reshuffle.
    #[must_use]
    pub const fn reshuffles(self) -> bool {
        matches!(self, Mode::Hard)
    }
}

/// Complete game configuration.
///
/// ```
/// use memory_match::core::{GameConfig, Mode};
///
/// let config = GameConfig::large().with_mode(Mode::Hard).with_seed(7);
/// assert_eq!(config.size, 36);
/// assert_eq!(config.grid_dimensions(), (6, 6));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of slots on the board. Must be even and positive.
    pub size: usize,

    /// Rule variant.
    #[serde(default)]
    pub mode: Mode,

    /// Seed for the deal. `None` draws a random one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Slots on the 4x4 board.
    pub const SMALL_SIZE: usize = 16;

    /// Slots on the 6x6 board.
    pub const LARGE_SIZE: usize = 36;

    /// Create a normal-mode configuration with a random seed.
    ///
    /// Not validated here; the engine validates on `new_game`.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            mode: Mode::Normal,
            seed: None,
        }
    }

    /// The 16-slot board.
    #[must_use]
    pub const fn small() -> Self {
        Self::new(Self::SMALL_SIZE)
    }

    /// The 36-slot board.
    #[must_use]
    pub const fn large() -> Self {
        Self::new(Self::LARGE_SIZE)
    }

    /// Set the rule variant.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the seed so the deal is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of distinct tokens on the board.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.size / 2
    }

    /// Check the board size.
    pub fn validate(&self) -> EngineResult<()> {
        self.token_count().map(|_| ())
    }

    /// Number of distinct tokens to deal.
    ///
    /// Fails with `InvalidConfiguration` if the size is odd, zero, or needs
    /// more tokens than a `Token` can name.
    pub fn token_count(&self) -> EngineResult<u32> {
        let invalid = EngineError::InvalidConfiguration { size: self.size };
        if self.size == 0 || self.size % 2 != 0 {
            return Err(invalid);
        }
        u32::try_from(self.pair_count()).map_err(|_| invalid)
    }

    /// The most square `(rows, columns)` layout for this board.
    ///
    /// Rows never exceed columns. A board of zero slots lays out as `(0, 0)`.
    #[must_use]
    pub fn grid_dimensions(&self) -> (usize, usize) {
        if self.size == 0 {
            return (0, 0);
        }

        let rows = (1..=self.size)
            .take_while(|r| r * r <= self.size)
            .filter(|r| self.size % r == 0)
            .last()
            .unwrap_or(1);

        (rows, self.size / rows)
    }

    /// Row-major `(row, column)` of a slot, or `None` if out of range.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.size {
            return None;
        }
        let (_, columns) = self.grid_dimensions();
        Some((index / columns, index % columns))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::small()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(GameConfig::small().size, 16);
        assert_eq!(GameConfig::large().size, 36);
        assert_eq!(GameConfig::default(), GameConfig::small());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(20).with_mode(Mode::Hard).with_seed(99);

        assert_eq!(config.size, 20);
        assert_eq!(config.mode, Mode::Hard);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.pair_count(), 10);
    }

    #[test]
    fn test_validate() {
        assert!(GameConfig::new(2).validate().is_ok());
        assert!(GameConfig::small().validate().is_ok());
        assert_eq!(
            GameConfig::new(0).validate(),
            Err(EngineError::InvalidConfiguration { size: 0 })
        );
        assert_eq!(
            GameConfig::new(15).validate(),
            Err(EngineError::InvalidConfiguration { size: 15 })
        );
    }

    #[test]
    fn test_token_count() {
        assert_eq!(GameConfig::small().token_count(), Ok(8));
        assert_eq!(GameConfig::large().token_count(), Ok(18));
        assert_eq!(
            GameConfig::new(0).token_count(),
            Err(EngineError::InvalidConfiguration { size: 0 })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_validate_rejects_more_pairs_than_tokens() {
        let largest = u32::MAX as usize * 2;
        assert_eq!(GameConfig::new(largest).token_count(), Ok(u32::MAX));

        let size = (1usize << 33) + 2;
        assert_eq!(
            GameConfig::new(size).validate(),
            Err(EngineError::InvalidConfiguration { size })
        );
        assert_eq!(
            GameConfig::new(largest + 2).validate(),
            Err(EngineError::InvalidConfiguration { size: largest + 2 })
        );
    }

    #[test]
    fn test_mode_reshuffles() {
        assert!(!Mode::Normal.reshuffles());
        assert!(Mode::Hard.reshuffles());
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(GameConfig::new(16).grid_dimensions(), (4, 4));
        assert_eq!(GameConfig::new(36).grid_dimensions(), (6, 6));
        assert_eq!(GameConfig::new(20).grid_dimensions(), (4, 5));
        assert_eq!(GameConfig::new(2).grid_dimensions(), (1, 2));
        assert_eq!(GameConfig::new(14).grid_dimensions(), (2, 7));
        assert_eq!(GameConfig::new(0).grid_dimensions(), (0, 0));
    }

    #[test]
    fn test_position() {
        let config = GameConfig::small();
        assert_eq!(config.position(0), Some((0, 0)));
        assert_eq!(config.position(5), Some((1, 1)));
        assert_eq!(config.position(15), Some((3, 3)));
        assert_eq!(config.position(16), None);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"size": 36}"#).unwrap();
        assert_eq!(config, GameConfig::large());

        let hard: GameConfig =
            serde_json::from_str(r#"{"size": 16, "mode": "Hard", "seed": 3}"#).unwrap();
        assert_eq!(hard, GameConfig::small().with_mode(Mode::Hard).with_seed(3));
    }
}
