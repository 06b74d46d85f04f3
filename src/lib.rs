//! # deathdraw
//!
//! Rules engine for DeathDraw, a higher-or-lower card game played with a
//! revolver on the table.
//!
//! Each turn a player bets whether the next card off the deck is higher or
//! lower than the visible one. A right call keeps the streak going and may
//! trigger the special effect printed on the drawn card. A wrong call spins
//! the player's revolver: a loaded chamber costs a life, an empty one adds
//! a bullet. Solo runs have no revolver; the first wrong call ends the run
//! and the streak goes to the leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every random decision (shuffles, effect
//!    placement, coin tosses, chamber spins) flows from one seeded
//!    `GameRng`, so a seed replays a match exactly.
//!
//! 2. **Presentation-free**: the engine returns structured reports
//!    (`MatchIntro`, `BetResult`, `EffectResolution`) and leaves text,
//!    input and storage to the caller.
//!
//! ## Modules
//!
//! - `core`: player IDs and state, game modes, errors, RNG
//! - `cards`: cards and the deck with its discard pile
//! - `revolver`: the six-chamber cylinder
//! - `coin`: coin tosses that decide an effect's direction
//! - `effects`: the seven special effects and their resolver
//! - `rules`: match lifecycle, bets and the `Match` engine
//! - `leaderboard`: high-score contract for solo runs

pub mod core;
pub mod cards;
pub mod revolver;
pub mod coin;
pub mod effects;
pub mod rules;
pub mod leaderboard;

// Re-export commonly used types
pub use crate::core::{
    GameError, Result,
    GameMode, ModeConfig,
    Player, PlayerId,
    GameRng,
};

pub use crate::cards::{Card, Deck, Suit};
pub use crate::revolver::Revolver;
pub use crate::coin::{CoinFlip, Side};
pub use crate::effects::{Category, EffectKind, EffectResolution, EffectResolver};
pub use crate::rules::{
    BetDirection, BetResult, Match, MatchBuilder, MatchIntro, MatchResult, MatchState,
};
pub use crate::leaderboard::{Leaderboard, ScoreEntry, TopScores};
