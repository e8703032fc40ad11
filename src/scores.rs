//! The session high-score table.
//!
//! A bounded, sorted, in-memory list. The completion gate pushes one record
//! per finished session and uses the returned rank to highlight the fresh
//! row on the victory screen.

use bevy_ecs::resource::Resource;
use tracing::info;

use crate::constants::ui::HIGH_SCORE_CAPACITY;

/// One finished session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    pub score: u32,
    pub elapsed_secs: f64,
    pub bugs_squashed: u32,
    pub perfect_run: bool,
}

/// Bounded high-score table, sorted by score descending.
#[derive(Resource, Debug, Clone)]
pub struct HighScores {
    entries: Vec<ScoreRecord>,
    capacity: usize,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::with_capacity(HIGH_SCORE_CAPACITY)
    }
}

impl HighScores {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Inserts a record at its rank. Ties land below existing records.
    ///
    /// Returns the new record's index for highlighting, or `None` if the
    /// table is full and the score did not make it.
    pub fn push(&mut self, record: ScoreRecord) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|existing| record.score > existing.score)
            .unwrap_or(self.entries.len());

        if rank >= self.capacity {
            return None;
        }

        self.entries.insert(rank, record);
        self.entries.truncate(self.capacity);
        info!(rank, score = record.score, "High score recorded");
        Some(rank)
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: u32) -> ScoreRecord {
        ScoreRecord {
            score,
            elapsed_secs: 60.0,
            bugs_squashed: 10,
            perfect_run: false,
        }
    }

    #[test]
    fn first_record_ranks_first() {
        let mut scores = HighScores::default();
        assert_eq!(scores.push(record(1000)), Some(0));
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn higher_score_displaces_lower() {
        let mut scores = HighScores::default();
        scores.push(record(1000));
        assert_eq!(scores.push(record(2000)), Some(0));
        assert_eq!(scores.entries()[1].score, 1000);
    }

    #[test]
    fn tie_ranks_below_existing_record() {
        let mut scores = HighScores::default();
        scores.push(record(1000));
        assert_eq!(scores.push(record(1000)), Some(1));
    }

    #[test]
    fn table_stays_bounded() {
        let mut scores = HighScores::with_capacity(3);
        for score in [500, 400, 300] {
            scores.push(record(score));
        }
        assert_eq!(scores.push(record(450)), Some(1));
        assert_eq!(scores.len(), 3);
        assert_eq!(scores.entries().last().map(|r| r.score), Some(400));
    }

    #[test]
    fn low_score_on_full_table_is_rejected() {
        let mut scores = HighScores::with_capacity(2);
        scores.push(record(500));
        scores.push(record(400));
        assert_eq!(scores.push(record(100)), None);
        assert_eq!(scores.len(), 2);
    }
}
