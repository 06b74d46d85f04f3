//! High-score contract for solo runs.
//!
//! The engine never stores scores itself. A finished solo run reports its
//! streak through a `Leaderboard`, which the host application backs with
//! whatever storage it has. `TopScores` is the in-memory reference
//! implementation; it serializes with serde so hosts can persist it as-is.

mod top_scores;

pub use top_scores::{ScoreEntry, TopScores, MAX_ENTRIES};

use crate::rules::{Match, MatchResult};

/// Storage for the best solo streaks.
pub trait Leaderboard {
    /// Offer a score. Returns `true` if it made the board.
    fn submit(&mut self, name: &str, count: u32) -> bool;

    /// Entries, best first.
    fn top(&self) -> Vec<ScoreEntry>;
}

/// Submit the streak of a finished solo run.
///
/// Returns `None` when `game` is not a finished solo run, otherwise
/// whether the streak made the board.
pub fn record_run<L: Leaderboard + ?Sized>(board: &mut L, game: &Match) -> Option<bool> {
    match game.result()? {
        MatchResult::RunOver { player, streak } => {
            let name = game.player(player)?.name();
            Some(board.submit(name, streak))
        }
        MatchResult::Winner(_) => None,
    }
}
