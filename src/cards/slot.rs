//! Slots - runtime card state.
//!
//! A `Slot` is one grid position: the token dealt there and whether it is
//! showing or already paired. It is a plain record; renderers map a slot
//! index to whatever widget they like.

use serde::{Deserialize, Serialize};

use super::token::Token;

/// One card on the board.
///
/// Invariant: `matched` implies `face_up`. Only the deck and engine mutate
/// the flags, through `flip_up`, `flip_down` and `mark_matched`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    token: Token,
    face_up: bool,
    matched: bool,
}

impl Slot {
    /// A face-down, unmatched card.
    #[must_use]
    pub const fn new(token: Token) -> Self {
        Self {
            token,
            face_up: false,
            matched: false,
        }
    }

    /// The symbol on this card.
    #[must_use]
    pub const fn token(&self) -> Token {
        self.token
    }

    /// Is the card showing its face?
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has the card been paired?
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched
    }

    /// Face down and unmatched: the only state a click can act on.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// The token if a player can currently see it.
    #[must_use]
    pub const fn visible_token(&self) -> Option<Token> {
        if self.face_up {
            Some(self.token)
        } else {
            None
        }
    }

    pub(crate) fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn flip_down(&mut self) {
        debug_assert!(!self.matched, "matched slots stay face up");
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
