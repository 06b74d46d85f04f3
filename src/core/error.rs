//! Crate error type.
//!
//! Every precondition violation in the engine surfaces as a `GameError`
//! at the point where it happens. Nothing is retried or swallowed; the
//! presentation layer decides how to report and re-prompt.

use thiserror::Error;

use crate::effects::EffectKind;
use crate::rules::MatchState;

use super::PlayerId;

/// Domain errors raised by the engine.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GameError {
    /// A mode or deck parameter is out of range.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Player names must contain at least one non-whitespace character.
    #[error("player name must not be empty")]
    InvalidName,

    /// The roster already holds as many players as the mode allows.
    #[error("roster is full ({capacity} player(s) allowed)")]
    RosterFull { capacity: usize },

    /// `start` was called before every seat was filled.
    #[error("roster incomplete: {present} of {required} player(s) present")]
    RosterIncomplete { required: usize, present: usize },

    /// The operation is not allowed in the current match state.
    #[error("cannot {action} while match is {state}")]
    InvalidStateTransition {
        state: MatchState,
        action: &'static str,
    },

    /// A bet was placed with no visible card to compare against.
    #[error("no visible card to bet against")]
    MissingCard,

    /// Effect resolution was requested for a card without an effect.
    #[error("card carries no special effect")]
    InvalidEffect,

    /// The effect branch needs a second player and none is present.
    #[error("effect {0} requires an opponent")]
    MissingOpponent(EffectKind),

    /// The player id does not belong to this match.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// Both the draw and discard piles are empty.
    #[error("deck exhausted: no cards left to draw or reshuffle")]
    DeckExhausted,

    /// Bullet counts must fit in the cylinder.
    #[error("bullet count {requested} out of range (capacity {capacity})")]
    BulletCountOutOfRange { requested: usize, capacity: usize },

    /// Card values run from 1 (ace) to 13 (king).
    #[error("card value {0} out of range 1..=13")]
    InvalidCardValue(u8),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::RosterFull { capacity: 2 };
        assert_eq!(err.to_string(), "roster is full (2 player(s) allowed)");

        let err = GameError::InvalidStateTransition {
            state: MatchState::Finished,
            action: "resolve a bet",
        };
        assert_eq!(err.to_string(), "cannot resolve a bet while match is FINISHED");

        let err = GameError::MissingOpponent(EffectKind::Sabotage);
        assert_eq!(err.to_string(), "effect Sabotage requires an opponent");
    }
}
