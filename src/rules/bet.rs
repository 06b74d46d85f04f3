//! Bets and the reports the engine hands back to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::effects::EffectResolution;

use super::MatchState;

/// Direction of a bet on the next card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetDirection {
    Higher,
    Lower,
}

impl BetDirection {
    /// Whether `drawn` wins this bet against `current`.
    ///
    /// Only a strictly higher (or lower) value wins; equal values lose
    /// either way.
    #[must_use]
    pub fn wins(self, current: &Card, drawn: &Card) -> bool {
        match self {
            BetDirection::Higher => drawn.is_greater_than(current),
            BetDirection::Lower => drawn.is_less_than(current),
        }
    }
}

impl std::fmt::Display for BetDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BetDirection::Higher => write!(f, "HIGHER"),
            BetDirection::Lower => write!(f, "LOWER"),
        }
    }
}

/// Summary returned by `Match::start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchIntro {
    pub mode_description: String,
    pub player_names: Vec<String>,
    pub first_card: Card,
}

/// Report of one resolved bet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetResult {
    pub player: PlayerId,
    pub player_name: String,
    pub hit: bool,
    /// The miss cost a life: a loaded chamber in versus, always in solo.
    pub chamber_fired: bool,
    pub remaining_lives: u32,
    pub previous_card: Card,
    pub new_card: Card,
    pub direction: BetDirection,
    /// Present when a winning bet drew an effect card.
    pub effect: Option<EffectResolution>,
    pub is_solo: bool,
    /// Match state after the bet.
    pub state: MatchState,
}

impl BetResult {
    #[must_use]
    pub fn ended_match(&self) -> bool {
        self.state == MatchState::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(value: u8) -> Card {
        Card::new(value, Suit::Hearts).unwrap()
    }

    #[test]
    fn test_higher() {
        assert!(BetDirection::Higher.wins(&card(7), &card(10)));
        assert!(!BetDirection::Higher.wins(&card(10), &card(7)));
    }

    #[test]
    fn test_lower() {
        assert!(BetDirection::Lower.wins(&card(10), &card(7)));
        assert!(!BetDirection::Lower.wins(&card(7), &card(10)));
    }

    #[test]
    fn test_tie_loses_both_ways() {
        let ten = card(10);
        let other_ten = Card::new(10, Suit::Clubs).unwrap();
        assert!(!BetDirection::Higher.wins(&ten, &other_ten));
        assert!(!BetDirection::Lower.wins(&ten, &other_ten));
    }
}
