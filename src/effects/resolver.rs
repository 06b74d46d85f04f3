//! Effect resolution - applying effects to players.
//!
//! `EffectResolver::apply` runs one effect for a known category.
//! `EffectResolver::resolve` is the full dispatch used by the match
//! engine: neutral effects apply directly, directional ones go through a
//! coin toss first.

use serde::{Deserialize, Serialize};

use crate::coin::{self, CoinFlip, Side};
use crate::core::{GameError, GameRng, Player, Result};
use crate::revolver::CAPACITY;

use super::{Category, EffectKind, EffectOutcome, ExtraTurn};

/// Everything that happened when a card's effect was resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResolution {
    pub kind: EffectKind,
    pub category: Category,
    /// The toss that picked the category; `None` for neutral effects.
    pub coin: Option<CoinFlip>,
    /// Rules text of the effect.
    pub description: String,
    /// What the effect did.
    pub outcome: EffectOutcome,
}

/// Applies effects to players.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a card's effect for `actor`.
    ///
    /// Fails with `InvalidEffect` when there is no effect to resolve.
    /// Sabotage and Chaos apply as neutral without touching the coin;
    /// everything else tosses the coin against `call` and applies the
    /// resulting category.
    pub fn resolve(
        effect: Option<EffectKind>,
        actor: &mut Player,
        opponent: Option<&mut Player>,
        call: Side,
        rng: &mut GameRng,
    ) -> Result<EffectResolution> {
        let kind = effect.ok_or(GameError::InvalidEffect)?;

        let (category, coin) = if kind.is_neutral() {
            (Category::Neutral, None)
        } else {
            let toss = coin::flip(call, rng);
            (toss.category(), Some(toss))
        };

        let outcome = Self::apply(kind, actor, opponent, category, rng)?;

        tracing::debug!(
            effect = %kind,
            %category,
            actor = actor.name(),
            outcome = %outcome.text,
            "effect applied"
        );

        Ok(EffectResolution {
            kind,
            category,
            coin,
            description: kind.rules_text().to_string(),
            outcome,
        })
    }

    /// Apply `kind` with a fixed category.
    ///
    /// A category the effect does not define (neutral for a directional
    /// effect, or the reverse) changes nothing and returns an empty
    /// outcome.
    pub fn apply(
        kind: EffectKind,
        actor: &mut Player,
        opponent: Option<&mut Player>,
        category: Category,
        rng: &mut GameRng,
    ) -> Result<EffectOutcome> {
        match kind {
            EffectKind::ExtraLife => Ok(Self::extra_life(actor, category)),
            EffectKind::DoubleTurn => Self::double_turn(actor, opponent, category),
            EffectKind::Vampire => Self::vampire(actor, opponent, category),
            EffectKind::Disarm => Ok(Self::disarm(actor, opponent, category)),
            EffectKind::WildRound => Ok(Self::wild_round(actor, opponent, category)),
            EffectKind::Sabotage => Self::sabotage(actor, opponent, category),
            EffectKind::Chaos => Self::chaos(actor, opponent, category, rng),
        }
    }

    fn extra_life(actor: &mut Player, category: Category) -> EffectOutcome {
        match category {
            Category::Positive => {
                actor.gain_life();
                EffectOutcome::text(format!("{} gains an extra life", actor.name()))
            }
            Category::Negative => {
                actor.lose_life();
                EffectOutcome::text(format!("{} loses a life", actor.name()))
            }
            Category::Neutral => EffectOutcome::default(),
        }
    }

    fn double_turn(
        actor: &mut Player,
        opponent: Option<&mut Player>,
        category: Category,
    ) -> Result<EffectOutcome> {
        match category {
            Category::Positive => {
                let opponent = require(opponent, EffectKind::DoubleTurn)?;
                opponent.grant_extra_turn();
                Ok(EffectOutcome::extra_turn(
                    format!("{} gets an extra turn!", opponent.name()),
                    ExtraTurn::Opponent,
                ))
            }
            Category::Negative => {
                actor.grant_extra_turn();
                Ok(EffectOutcome::extra_turn(
                    format!("{} gets an extra turn!", actor.name()),
                    ExtraTurn::Actor,
                ))
            }
            Category::Neutral => Ok(EffectOutcome::default()),
        }
    }

    fn vampire(
        actor: &mut Player,
        opponent: Option<&mut Player>,
        category: Category,
    ) -> Result<EffectOutcome> {
        match category {
            Category::Positive => {
                let opponent = require(opponent, EffectKind::Vampire)?;
                actor.gain_life();
                opponent.lose_life();
                Ok(EffectOutcome::text(format!(
                    "{} drains a life from {}",
                    actor.name(),
                    opponent.name()
                )))
            }
            Category::Negative => {
                let opponent = require(opponent, EffectKind::Vampire)?;
                opponent.gain_life();
                actor.lose_life();
                Ok(EffectOutcome::text(format!(
                    "{} drains a life from {}",
                    opponent.name(),
                    actor.name()
                )))
            }
            Category::Neutral => Ok(EffectOutcome::default()),
        }
    }

    fn disarm(actor: &mut Player, opponent: Option<&mut Player>, category: Category) -> EffectOutcome {
        match category {
            Category::Positive => {
                actor.revolver_mut().unload();
                EffectOutcome::text(format!("{} drops a bullet from their revolver", actor.name()))
            }
            Category::Negative => match opponent {
                Some(opponent) => {
                    opponent.revolver_mut().unload();
                    EffectOutcome::text(format!(
                        "{} drops a bullet from their revolver",
                        opponent.name()
                    ))
                }
                None => EffectOutcome::text(format!("{} has nobody to disarm", actor.name())),
            },
            Category::Neutral => EffectOutcome::default(),
        }
    }

    fn wild_round(actor: &mut Player, opponent: Option<&mut Player>, category: Category) -> EffectOutcome {
        match category {
            Category::Positive => match opponent {
                Some(opponent) => {
                    opponent.revolver_mut().load();
                    EffectOutcome::text(format!(
                        "A wild round appears in {}'s revolver!",
                        opponent.name()
                    ))
                }
                None => EffectOutcome::text(format!(
                    "{} dodges the wild round (no opponent)",
                    actor.name()
                )),
            },
            Category::Negative => {
                actor.revolver_mut().load();
                EffectOutcome::text(format!("A wild round appears in {}'s revolver!", actor.name()))
            }
            Category::Neutral => EffectOutcome::default(),
        }
    }

    fn sabotage(
        actor: &mut Player,
        opponent: Option<&mut Player>,
        category: Category,
    ) -> Result<EffectOutcome> {
        if category != Category::Neutral {
            return Ok(EffectOutcome::default());
        }
        let opponent = require(opponent, EffectKind::Sabotage)?;
        actor.swap_revolvers(opponent);
        Ok(EffectOutcome::text(format!(
            "SABOTAGE! {} and {} exchange revolvers",
            actor.name(),
            opponent.name()
        )))
    }

    fn chaos(
        actor: &mut Player,
        opponent: Option<&mut Player>,
        category: Category,
        rng: &mut GameRng,
    ) -> Result<EffectOutcome> {
        if category != Category::Neutral {
            return Ok(EffectOutcome::default());
        }

        let actor_bullets = rng.gen_range_inclusive(0..=CAPACITY);
        actor.revolver_mut().set_bullet_count(actor_bullets)?;

        let text = match opponent {
            Some(opponent) => {
                let opponent_bullets = rng.gen_range_inclusive(0..=CAPACITY);
                opponent.revolver_mut().set_bullet_count(opponent_bullets)?;
                format!(
                    "CHAOS! {}'s revolver now holds {} bullet(s) and {}'s holds {}",
                    actor.name(),
                    actor_bullets,
                    opponent.name(),
                    opponent_bullets
                )
            }
            None => format!(
                "CHAOS! {}'s revolver now holds {} bullet(s)",
                actor.name(),
                actor_bullets
            ),
        };
        Ok(EffectOutcome::text(text))
    }
}

fn require(opponent: Option<&mut Player>, kind: EffectKind) -> Result<&mut Player> {
    opponent.ok_or(GameError::MissingOpponent(kind))
}
