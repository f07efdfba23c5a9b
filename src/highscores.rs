//! High score leaderboard system
//!
//! Persisted as a JSON file, tracks top 10 scores.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HighScoreError;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u64,
    /// Seconds survived
    pub survived_secs: f32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A score places if it is positive and the board has room or it beats
    /// the last entry
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES || self.entries.last().is_none_or(|e| score > e.score))
    }

    /// 1-based rank `score` would take, or `None` if it would not place.
    ///
    /// Equal scores rank below the ones already on the board.
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        self.qualifies(score).then(|| self.slot(score) + 1)
    }

    /// Insert `score` at its rank, dropping whatever falls off the bottom
    pub fn add_score(&mut self, score: u64, survived_secs: f32) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(rank - 1, HighScoreEntry { score, survived_secs });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    // Entries are sorted descending, so this is a binary search
    fn slot(&self, score: u64) -> usize {
        self.entries.partition_point(|e| e.score >= score)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load from `path`; a missing file is an empty leaderboard
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HighScoreError> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores at {}, starting fresh", path.display());
                return Ok(Self::new());
            }
            Err(e) => return Err(e.into()),
        };
        let scores: HighScores = serde_json::from_str(&json)?;
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HighScoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.potential_rank(0), None);
    }

    #[test]
    fn test_ranks_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(50, 10.0), Some(1));
        assert_eq!(scores.add_score(100, 20.0), Some(1));
        assert_eq!(scores.add_score(75, 15.0), Some(2));
        let order: Vec<_> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![100, 75, 50]);
        assert_eq!(scores.top_score(), Some(100));
    }

    #[test]
    fn test_tie_ranks_below_existing() {
        let mut scores = HighScores::new();
        scores.add_score(40, 1.0);
        assert_eq!(scores.potential_rank(40), Some(2));
        assert_eq!(scores.add_score(40, 9.0), Some(2));
        assert_eq!(scores.entries[0].survived_secs, 1.0);
    }

    #[test]
    fn test_full_board_truncates() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            scores.add_score(i * 10, 1.0);
        }
        assert!(!scores.qualifies(10));
        assert_eq!(scores.potential_rank(15), Some(MAX_HIGH_SCORES));
        assert_eq!(scores.add_score(15, 1.0), Some(MAX_HIGH_SCORES));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().unwrap().score, 15);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join(format!("rock-splitter-scores-{}.json", std::process::id()));
        let mut scores = HighScores::new();
        scores.add_score(35, 12.5);
        scores.save(&path).unwrap();

        let loaded = HighScores::load(&path).unwrap();
        assert_eq!(loaded.entries, scores.entries);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let loaded = HighScores::load("/definitely/not/here/scores.json").unwrap();
        assert!(loaded.is_empty());
    }
}
