//! Card system: tokens, slots and the dealt deck.
//!
//! ## Key Types
//!
//! - `Token`: The symbol shared by the two cards of a pair
//! - `Slot`: Runtime card state (token, face up, matched)
//! - `Deck`: Ordered slots with dealing and hidden-card reshuffles

pub mod deck;
pub mod slot;
pub mod token;

pub use deck::Deck;
pub use slot::Slot;
pub use token::Token;
