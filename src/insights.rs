use crate::journal::Journal;
use crate::models::Mood;
use crate::mood_log::{MoodLog, RECENT_WINDOW};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub count: usize,
    pub cells: [bool; RECENT_WINDOW],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstLog,
    ThreeDayCheckIn,
    FirstJournal,
    FoundCalm,
}

impl Achievement {
    pub fn label(self) -> &'static str {
        match self {
            Achievement::FirstLog => "First Log",
            Achievement::ThreeDayCheckIn => "3-Day Check-in",
            Achievement::FirstJournal => "First Journal",
            Achievement::FoundCalm => "Found Calm",
        }
    }
}

pub fn streak(log: &MoodLog) -> Streak {
    let mut cells = [false; RECENT_WINDOW];
    for (index, cell) in cells.iter_mut().enumerate() {
        *cell = index < log.len();
    }
    Streak {
        count: log.streak_count(),
        cells,
    }
}

/// Hardcoded badge checklist. "First Log" is shown unconditionally.
pub fn achievements(log: &MoodLog, journal: &Journal) -> Vec<Achievement> {
    let mut earned = vec![Achievement::FirstLog];
    if log.len() >= 3 {
        earned.push(Achievement::ThreeDayCheckIn);
    }
    if !journal.is_empty() {
        earned.push(Achievement::FirstJournal);
    }
    if log.contains(Mood::Calm) {
        earned.push(Achievement::FoundCalm);
    }
    earned
}
