//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Roster slot of a player. The first player added is `PlayerId(0)`.
//!
//! ## Player
//!
//! Name, life totals, the owned revolver, and the current hit streak.
//! Lives are kept inside `0..=max_lives`; gaining at the cap or losing at
//! zero is a no-op.

use serde::{Deserialize, Serialize};

use crate::revolver::Revolver;

use super::error::{GameError, Result};

/// Roster slot identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    lives: u32,
    max_lives: u32,
    revolver: Revolver,
    streak: u32,
    best_streak: u32,
    /// Turns granted by Double-Turn that have not been played yet.
    extra_turns: u32,
}

impl Player {
    /// Create a player at full lives.
    ///
    /// The name is trimmed; an empty result is rejected.
    pub fn new(id: PlayerId, name: &str, max_lives: u32, revolver: Revolver) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidName);
        }
        if max_lives == 0 {
            return Err(GameError::Configuration(
                "maximum lives must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            lives: max_lives,
            max_lives,
            revolver,
            streak: 0,
            best_streak: 0,
            extra_turns: 0,
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    #[must_use]
    pub fn revolver(&self) -> &Revolver {
        &self.revolver
    }

    pub(crate) fn revolver_mut(&mut self) -> &mut Revolver {
        &mut self.revolver
    }

    /// Consecutive successful bets since this player's last miss.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak this match, including the current one.
    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    #[must_use]
    pub fn has_max_lives(&self) -> bool {
        self.lives == self.max_lives
    }

    /// Add one life unless already at the maximum.
    pub(crate) fn gain_life(&mut self) {
        if self.lives < self.max_lives {
            self.lives += 1;
        }
    }

    /// Remove one life unless already at zero.
    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub(crate) fn record_hit(&mut self) {
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
    }

    pub(crate) fn record_miss(&mut self) {
        self.streak = 0;
    }

    #[must_use]
    pub fn extra_turns(&self) -> u32 {
        self.extra_turns
    }

    pub(crate) fn grant_extra_turn(&mut self) {
        self.extra_turns += 1;
    }

    /// Consume one granted extra turn, if any.
    pub(crate) fn take_extra_turn(&mut self) -> bool {
        if self.extra_turns > 0 {
            self.extra_turns -= 1;
            true
        } else {
            false
        }
    }

    /// Exchange revolvers with another player.
    ///
    /// Both sides move in one call, so no caller ever sees only half of
    /// the exchange.
    pub(crate) fn swap_revolvers(&mut self, other: &mut Player) {
        std::mem::swap(&mut self.revolver, &mut other.revolver);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | lives {}/{} | bullets {}",
            self.name,
            self.lives,
            self.max_lives,
            self.revolver.bullet_count()
        )
    }
}
