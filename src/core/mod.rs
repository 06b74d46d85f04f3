//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the leaf building blocks every other module depends on.
//! Matches are configured via `ModeConfig` rather than by changing the
//! engine.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameMode, ModeConfig};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
