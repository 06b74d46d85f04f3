//! Match rules: lifecycle, bets and the engine that resolves them.
//!
//! - `MatchState` / `MatchResult`: where a match is and how it ended
//! - `BetDirection`, `BetResult`, `MatchIntro`: what goes in and out
//! - `Match` / `MatchBuilder`: the engine itself

pub mod bet;
pub mod engine;
pub mod state;

pub use bet::{BetDirection, BetResult, MatchIntro};
pub use engine::{Match, MatchBuilder};
pub use state::{MatchResult, MatchState};
