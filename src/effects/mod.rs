//! Special effects carried by cards.
//!
//! - `EffectKind`: the seven effect variants
//! - `Category`: positive, negative or neutral outcome
//! - `EffectResolver`: applies an effect to the acting player and their
//!   opponent, tossing the coin first for directional effects
//!
//! ## Design
//!
//! Effects are a plain tagged enum. Each variant has one resolver
//! function, selected by a `match`; effects hold no state of their own.

mod effect;
mod resolver;

pub use effect::{Category, EffectKind, EffectOutcome, ExtraTurn};
pub use resolver::{EffectResolution, EffectResolver};
