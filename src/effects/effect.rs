//! Effect definitions.
//!
//! Effects are stateless: an `EffectKind` is just a tag, and everything it
//! does is decided by the category it resolves to and the players it is
//! applied to.

use serde::{Deserialize, Serialize};

/// A special effect a card can carry.
///
/// ## Directional effects
///
/// Resolved positive or negative by a coin toss:
/// - `ExtraLife`: gain a life / lose a life
/// - `DoubleTurn`: opponent plays an extra turn / you play an extra turn
/// - `Vampire`: steal a life from the opponent / the opponent steals one
/// - `Disarm`: drop a bullet from your revolver / from the opponent's
/// - `WildRound`: a bullet appears in the opponent's revolver / in yours
///
/// ## Neutral effects
///
/// No coin toss:
/// - `Sabotage`: exchange revolvers with the opponent
/// - `Chaos`: every revolver gets a random bullet count in `0..=6`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    ExtraLife,
    DoubleTurn,
    Vampire,
    Disarm,
    WildRound,
    Sabotage,
    Chaos,
}

const ALL_EFFECTS: [EffectKind; 7] = [
    EffectKind::ExtraLife,
    EffectKind::DoubleTurn,
    EffectKind::Vampire,
    EffectKind::Disarm,
    EffectKind::WildRound,
    EffectKind::Sabotage,
    EffectKind::Chaos,
];

const SOLO_EFFECTS: [EffectKind; 4] = [
    EffectKind::ExtraLife,
    EffectKind::Disarm,
    EffectKind::WildRound,
    EffectKind::Chaos,
];

impl EffectKind {
    /// Every effect.
    pub const ALL: [EffectKind; 7] = ALL_EFFECTS;

    /// Effects a deck may draw from.
    ///
    /// Without two-player effects the pool drops every kind for which
    /// `requires_opponent` is true.
    #[must_use]
    pub fn pool(allow_two_player_effects: bool) -> &'static [EffectKind] {
        if allow_two_player_effects {
            &ALL_EFFECTS
        } else {
            &SOLO_EFFECTS
        }
    }

    /// Whether the effect only makes sense with a second player seated.
    #[must_use]
    pub fn requires_opponent(self) -> bool {
        matches!(
            self,
            EffectKind::DoubleTurn | EffectKind::Vampire | EffectKind::Sabotage
        )
    }

    /// Neutral effects skip the coin toss.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        matches!(self, EffectKind::Sabotage | EffectKind::Chaos)
    }

    /// Rules text shown when the card is revealed.
    #[must_use]
    pub fn rules_text(self) -> &'static str {
        match self {
            EffectKind::ExtraLife => "Positive: you gain a life. Negative: you lose a life",
            EffectKind::DoubleTurn => {
                "Positive: your opponent takes an extra turn. Negative: you take an extra turn"
            }
            EffectKind::Vampire => {
                "Positive: you steal a life from your opponent. Negative: your opponent steals one from you"
            }
            EffectKind::Disarm => {
                "Positive: you drop a bullet from your revolver. Negative: your opponent drops one"
            }
            EffectKind::WildRound => {
                "Positive: a bullet appears in your opponent's revolver. Negative: one appears in yours"
            }
            EffectKind::Sabotage => "Neutral: you and your opponent exchange revolvers",
            EffectKind::Chaos => "Neutral: every revolver gets a random number of bullets",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EffectKind::ExtraLife => "Extra Life",
            EffectKind::DoubleTurn => "Double Turn",
            EffectKind::Vampire => "Vampire",
            EffectKind::Disarm => "Disarm",
            EffectKind::WildRound => "Wild Round",
            EffectKind::Sabotage => "Sabotage",
            EffectKind::Chaos => "Chaos",
        };
        write!(f, "{}", name)
    }
}

/// Outcome class of an applied effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Positive => write!(f, "POSITIVE"),
            Category::Negative => write!(f, "NEGATIVE"),
            Category::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Who receives a turn granted by Double-Turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraTurn {
    Actor,
    Opponent,
}

/// What applying an effect did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectOutcome {
    /// Human-readable account of the state change.
    pub text: String,
    /// Extra turn for the match engine to schedule.
    pub extra_turn: Option<ExtraTurn>,
}

impl EffectOutcome {
    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extra_turn: None,
        }
    }

    pub(crate) fn extra_turn(text: impl Into<String>, who: ExtraTurn) -> Self {
        Self {
            text: text.into(),
            extra_turn: Some(who),
        }
    }
}
