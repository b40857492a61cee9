//! Engine error taxonomy.
//!
//! Every error is local and recoverable: a rejected call leaves the engine
//! exactly as it was.

use thiserror::Error;

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why an engine call was rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Board size is odd, zero, or has more pairs than tokens.
    #[error("invalid board size {size}: must be even, positive and at most {} pairs", u32::MAX)]
    InvalidConfiguration { size: usize },

    /// Slot index outside the board.
    #[error("slot index {index} out of range for board of {len}")]
    InvalidIndex { index: usize, len: usize },

    /// The call is not allowed in the current phase.
    #[error("illegal operation: {0}")]
    IllegalOperation(#[from] IllegalOperation),
}

/// Reasons a well-formed call is illegal right now.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalOperation {
    /// Two slots are face up and waiting for `resolve_mismatch`.
    #[error("two slots are already selected")]
    ResolutionPending,

    /// The slot is already face up or matched.
    #[error("slot {index} is already face up or matched")]
    SlotUnavailable { index: usize },

    /// `resolve_mismatch` called without two mismatched slots showing.
    #[error("no mismatch is pending")]
    NoPendingMismatch,

    /// Every pair has been found.
    #[error("the game is over")]
    GameOver,
}
