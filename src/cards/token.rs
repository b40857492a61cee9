//! Card faces.
//!
//! A `Token` names the symbol printed on a card. Exactly two slots on a
//! board share each token; the presentation layer decides what picture or
//! glyph a token is drawn as.

use serde::{Deserialize, Serialize};

/// Symbol identifier shared by the two cards of a pair.
///
/// Tokens on an N-slot board are `0..N/2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token(pub u32);

impl Token {
    /// Create a new token.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
