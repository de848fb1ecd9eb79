use crate::insights::{self, Achievement, Streak};
use crate::journal::Journal;
use crate::models::{JournalEntry, Mood, MoodEntry, ParseError};
use crate::mood_log::MoodLog;
use crate::suggestions::{self, Suggestion};
use crate::trend;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Onboarding,
    Mood,
    Suggestions,
    Journal,
    Insights,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Onboarding,
        Screen::Mood,
        Screen::Suggestions,
        Screen::Journal,
        Screen::Insights,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Mood => "mood",
            Screen::Suggestions => "suggestions",
            Screen::Journal => "journal",
            Screen::Insights => "insights",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Onboarding => "Home",
            Screen::Mood => "Mood",
            Screen::Suggestions => "Suggestions",
            Screen::Journal => "Journal",
            Screen::Insights => "Insights",
        }
    }
}

impl FromStr for Screen {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim();
        Screen::ALL
            .into_iter()
            .find(|screen| screen.key() == key)
            .ok_or_else(|| ParseError::Screen(key.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    ReduceStress,
    BuildHabit,
    SleepBetter,
    BeMindful,
    ImproveFocus,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::ReduceStress,
        Goal::BuildHabit,
        Goal::SleepBetter,
        Goal::BeMindful,
        Goal::ImproveFocus,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Goal::ReduceStress => "reduce_stress",
            Goal::BuildHabit => "build_habit",
            Goal::SleepBetter => "sleep_better",
            Goal::BeMindful => "be_mindful",
            Goal::ImproveFocus => "improve_focus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::ReduceStress => "Reduce stress",
            Goal::BuildHabit => "Build a habit",
            Goal::SleepBetter => "Sleep better",
            Goal::BeMindful => "Be more mindful",
            Goal::ImproveFocus => "Improve focus",
        }
    }
}

impl FromStr for Goal {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim();
        Goal::ALL
            .into_iter()
            .find(|goal| goal.key() == key)
            .ok_or_else(|| ParseError::Goal(key.to_string()))
    }
}

/// Unsaved form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Drafts {
    pub selected_mood: Option<Mood>,
    pub note: String,
    pub journal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendView {
    pub values: Vec<u8>,
    pub points: Vec<trend::Point>,
    pub polyline: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsView {
    pub streak: Streak,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub goals: Vec<Goal>,
    pub drafts: Drafts,
    pub latest_mood: Option<Mood>,
    pub moods: Vec<MoodEntry>,
    pub journal_prompt: &'static str,
    pub journal: Vec<JournalEntry>,
    pub suggestion: Suggestion,
    pub trend: TrendView,
    pub insights: InsightsView,
}

/// All state of one page load. Mutated only through the action methods.
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    goals: Vec<Goal>,
    drafts: Drafts,
    moods: MoodLog,
    journal: Journal,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            goals: vec![Goal::ReduceStress],
            drafts: Drafts::default(),
            moods: MoodLog::new(),
            journal: Journal::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Returns whether the goal is selected afterwards.
    pub fn toggle_goal(&mut self, goal: Goal) -> bool {
        if let Some(position) = self.goals.iter().position(|selected| *selected == goal) {
            self.goals.remove(position);
            false
        } else {
            self.goals.push(goal);
            true
        }
    }

    pub fn select_mood(&mut self, mood: Option<Mood>) {
        self.drafts.selected_mood = mood;
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.drafts.note = note.into();
    }

    /// Records the selected mood with the drafted note. Drafts are cleared only
    /// when something was recorded.
    pub fn save_mood(&mut self) -> Option<MoodEntry> {
        let entry = self
            .moods
            .record(self.drafts.selected_mood, Some(self.drafts.note.as_str()))?;
        self.drafts.selected_mood = None;
        self.drafts.note.clear();
        Some(entry)
    }

    pub fn set_journal_draft(&mut self, body: impl Into<String>) {
        self.drafts.journal = body.into();
    }

    pub fn save_journal(&mut self) -> Option<JournalEntry> {
        let entry = self.journal.save(&self.drafts.journal)?;
        self.drafts.journal.clear();
        Some(entry)
    }

    pub fn clear_journal_draft(&mut self) {
        self.drafts.journal.clear();
    }

    /// Records directly, bypassing the drafts.
    pub fn record_mood(&mut self, mood: Option<Mood>, note: Option<&str>) -> Option<MoodEntry> {
        self.moods.record(mood, note)
    }

    pub fn write_journal(&mut self, body: &str) -> Option<JournalEntry> {
        self.journal.save(body)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    pub fn moods(&self) -> &MoodLog {
        &self.moods
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn latest_mood(&self) -> Option<Mood> {
        self.moods.latest()
    }

    pub fn suggestion(&self) -> Suggestion {
        suggestions::suggest(self.latest_mood())
    }

    pub fn trend(&self) -> TrendView {
        let values = trend::trend_values(&self.moods);
        let projection = trend::project(&values, trend::ChartFrame::TREND);
        let polyline = trend::polyline_points(projection.clone());
        let points = projection.collect();
        let label = format!("Last {} logs", values.len());
        TrendView {
            values,
            points,
            polyline,
            label,
        }
    }

    pub fn streak(&self) -> Streak {
        insights::streak(&self.moods)
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        insights::achievements(&self.moods, &self.journal)
    }

    pub fn insights(&self) -> InsightsView {
        InsightsView {
            streak: self.streak(),
            achievements: self.achievements(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            goals: self.goals.clone(),
            drafts: self.drafts.clone(),
            latest_mood: self.latest_mood(),
            moods: self.moods.entries().cloned().collect(),
            journal_prompt: self.journal.prompt(),
            journal: self.journal.entries().cloned().collect(),
            suggestion: self.suggestion(),
            trend: self.trend(),
            insights: self.insights(),
        }
    }
}
