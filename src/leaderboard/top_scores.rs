//! In-memory top-five table.

use serde::{Deserialize, Serialize};

use super::Leaderboard;

/// Entries kept on the board.
pub const MAX_ENTRIES: usize = 5;

/// One line of the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub count: u32,
}

impl ScoreEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

impl std::fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.count)
    }
}

/// Best streaks, highest first, at most `MAX_ENTRIES` long.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScores {
    entries: Vec<ScoreEntry>,
}

impl TopScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board from stored entries, restoring order and size.
    pub fn from_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        // Stable: equal counts keep their stored order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    /// Whether `count` would make the board.
    #[must_use]
    pub fn qualifies(&self, count: u32) -> bool {
        match self.entries.last() {
            Some(lowest) if self.entries.len() >= MAX_ENTRIES => count > lowest.count,
            _ => true,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Leaderboard for TopScores {
    fn submit(&mut self, name: &str, count: u32) -> bool {
        if !self.qualifies(count) {
            return false;
        }
        let position = self
            .entries
            .iter()
            .position(|e| e.count < count)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, ScoreEntry::new(name.trim(), count));
        self.entries.truncate(MAX_ENTRIES);

        tracing::debug!(name, count, position, "new top score");
        true
    }

    fn top(&self) -> Vec<ScoreEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(board: &TopScores) -> Vec<u32> {
        board.entries().iter().map(|e| e.count).collect()
    }

    #[test]
    fn test_fills_then_prunes() {
        let mut board = TopScores::new();
        for (i, count) in [3, 8, 1, 5, 2].into_iter().enumerate() {
            assert!(board.submit(&format!("p{i}"), count));
        }
        assert_eq!(counts(&board), vec![8, 5, 3, 2, 1]);

        assert!(board.submit("late", 4));
        assert_eq!(counts(&board), vec![8, 5, 4, 3, 2]);
        assert_eq!(board.len(), MAX_ENTRIES);
    }

    #[test]
    fn test_must_beat_lowest_when_full() {
        let mut board = TopScores::from_entries((1..=5).map(|c| ScoreEntry::new("x", c)));
        assert!(!board.qualifies(1));
        assert!(!board.submit("tie", 1));
        assert!(!board.submit("zero", 0));
        assert!(board.submit("two", 2));
        assert_eq!(counts(&board), vec![5, 4, 3, 2, 2]);
    }

    #[test]
    fn test_zero_qualifies_when_not_full() {
        let mut board = TopScores::new();
        assert!(board.submit("Ana", 0));
        assert_eq!(board.top(), vec![ScoreEntry::new("Ana", 0)]);
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let mut board = TopScores::new();
        board.submit("first", 4);
        board.submit("second", 4);
        let names: Vec<_> = board.top().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_from_entries_sorts_and_truncates() {
        let board = TopScores::from_entries(
            [1, 9, 4, 7, 2, 6].into_iter().map(|c| ScoreEntry::new("x", c)),
        );
        assert_eq!(counts(&board), vec![9, 7, 6, 4, 2]);
    }

    #[test]
    fn test_serialization() {
        let mut board = TopScores::new();
        board.submit("Ana", 3);
        let json = serde_json::to_string(&board).unwrap();
        let restored: TopScores = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
        assert_eq!(ScoreEntry::new("Ana", 3).to_string(), "Ana - 3");
    }
}
