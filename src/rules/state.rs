//! Match lifecycle and results.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Lifecycle of a match. Transitions only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    NotStarted,
    InProgress,
    Finished,
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchState::NotStarted => write!(f, "NOT_STARTED"),
            MatchState::InProgress => write!(f, "IN_PROGRESS"),
            MatchState::Finished => write!(f, "FINISHED"),
        }
    }
}

/// How a finished match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Versus: the last player with lives left.
    Winner(PlayerId),
    /// Solo: the run ended after `streak` successful bets.
    RunOver { player: PlayerId, streak: u32 },
}

impl MatchResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            MatchResult::Winner(p) => *p == player,
            MatchResult::RunOver { .. } => false,
        }
    }
}
