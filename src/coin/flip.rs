//! Coin toss and its outcome.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::effects::Category;

/// Coin face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Heads,
    Tails,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Heads => Side::Tails,
            Side::Tails => Side::Heads,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Heads => write!(f, "HEADS"),
            Side::Tails => write!(f, "TAILS"),
        }
    }
}

/// Outcome of one toss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinFlip {
    /// Side the player called.
    pub call: Side,
    /// Side the coin landed on.
    pub outcome: Side,
    /// Whether the call was right.
    pub is_match: bool,
}

impl CoinFlip {
    /// Effect category the toss selects: a correct call is positive.
    #[must_use]
    pub fn category(&self) -> Category {
        if self.is_match {
            Category::Positive
        } else {
            Category::Negative
        }
    }
}

impl std::fmt::Display for CoinFlip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "called {} - landed {} - {}",
            self.call,
            self.outcome,
            if self.is_match { "WIN" } else { "LOSS" }
        )
    }
}

/// Toss the coin against the player's call.
pub fn flip(call: Side, rng: &mut GameRng) -> CoinFlip {
    let outcome = if rng.gen_bool(0.5) { Side::Heads } else { Side::Tails };
    CoinFlip {
        call,
        outcome,
        is_match: call == outcome,
    }
}
