use crate::models::{Mood, MoodEntry};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

/// Number of recent entries that drive the trend chart and cap the streak.
pub const RECENT_WINDOW: usize = 7;

/// Prepend-only log of mood entries, newest first.
#[derive(Debug, Clone, Default)]
pub struct MoodLog {
    entries: VecDeque<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mood at the current time. Returns `None` and leaves the log
    /// untouched when no mood is given.
    pub fn record(&mut self, mood: Option<Mood>, note: Option<&str>) -> Option<MoodEntry> {
        self.record_at(mood, note, Utc::now())
    }

    pub fn record_at(
        &mut self,
        mood: Option<Mood>,
        note: Option<&str>,
        at: DateTime<Utc>,
    ) -> Option<MoodEntry> {
        let mood = mood?;
        let note = note
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let entry = MoodEntry {
            id: Uuid::new_v4(),
            mood,
            score: mood.score(),
            note,
            at,
        };
        self.entries.push_front(entry.clone());
        Some(entry)
    }

    pub fn latest(&self) -> Option<Mood> {
        self.entries.front().map(|entry| entry.mood)
    }

    /// Scores of the `n` newest entries in chronological order.
    pub fn recent_scores(&self, n: usize) -> Vec<u8> {
        let mut scores: Vec<u8> = self.entries.iter().take(n).map(|entry| entry.score).collect();
        scores.reverse();
        scores
    }

    /// Count of logs capped at a week. Not a consecutive-day streak.
    pub fn streak_count(&self) -> usize {
        self.entries.len().min(RECENT_WINDOW)
    }

    pub fn contains(&self, mood: Mood) -> bool {
        self.entries.iter().any(|entry| entry.mood == mood)
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &MoodEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
