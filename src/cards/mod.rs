//! Card system: card values and the deck.
//!
//! ## Key Types
//!
//! - `Card`: value 1-13, suit, optional special effect
//! - `Suit`: decorative; comparisons use the value only
//! - `Deck`: draw/discard piles over a fixed card universe, reshuffled
//!   when the draw pile runs out

pub mod card;
pub mod deck;

pub use card::{Card, Suit, MAX_VALUE, MIN_VALUE};
pub use deck::{effect_card_target, Deck, DeckSnapshot, STANDARD_DECK_SIZE};
