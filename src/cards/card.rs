//! Card values and suits.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};
use crate::effects::EffectKind;

/// Lowest card value (ace).
pub const MIN_VALUE: u8 = 1;
/// Highest card value (king).
pub const MAX_VALUE: u8 = 13;

/// Card suit. Decorative only: cards compare by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    #[must_use]
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        write!(f, "{}", name)
    }
}

/// A playing card.
///
/// Value and suit are fixed at creation. The effect slot is filled at most
/// once, while the deck is being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: u8,
    suit: Suit,
    effect: Option<EffectKind>,
}

impl Card {
    /// Create a plain card. `value` must be in `1..=13`.
    pub fn new(value: u8, suit: Suit) -> Result<Self> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(GameError::InvalidCardValue(value));
        }
        Ok(Self {
            value,
            suit,
            effect: None,
        })
    }

    /// Create a card carrying an effect.
    pub fn with_effect(value: u8, suit: Suit, effect: EffectKind) -> Result<Self> {
        let mut card = Self::new(value, suit)?;
        card.effect = Some(effect);
        Ok(card)
    }

    pub(crate) fn assign_effect(&mut self, effect: EffectKind) {
        debug_assert!(self.effect.is_none(), "effect slot assigned twice");
        self.effect = Some(effect);
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn effect(&self) -> Option<EffectKind> {
        self.effect
    }

    #[must_use]
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Strictly higher value. Suits are ignored.
    #[must_use]
    pub fn is_greater_than(&self, other: &Card) -> bool {
        self.value > other.value
    }

    /// Strictly lower value. Suits are ignored.
    #[must_use]
    pub fn is_less_than(&self, other: &Card) -> bool {
        self.value < other.value
    }

    #[must_use]
    pub fn same_value(&self, other: &Card) -> bool {
        self.value == other.value
    }

    /// Face name: A, 2..10, J, Q, K.
    #[must_use]
    pub fn rank_name(&self) -> String {
        match self.value {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            v => v.to_string(),
        }
    }

    /// Identity within the 52-card universe, ignoring the effect slot.
    #[must_use]
    pub fn face(&self) -> (u8, Suit) {
        (self.value, self.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)?;
        if let Some(effect) = self.effect {
            write!(f, " [{}]", effect)?;
        }
        Ok(())
    }
}
