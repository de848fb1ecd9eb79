use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown mood '{0}'")]
    Mood(String),
    #[error("unknown screen '{0}'")]
    Screen(String),
    #[error("unknown goal '{0}'")]
    Goal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Joy,
    Calm,
    Ok,
    Anxious,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Joy, Mood::Calm, Mood::Ok, Mood::Anxious, Mood::Sad];

    pub fn key(self) -> &'static str {
        match self {
            Mood::Joy => "joy",
            Mood::Calm => "calm",
            Mood::Ok => "ok",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Joy => "Joy",
            Mood::Calm => "Calm",
            Mood::Ok => "Okay",
            Mood::Anxious => "Anxious",
            Mood::Sad => "Sad",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Joy => "😊",
            Mood::Calm => "😌",
            Mood::Ok => "🙂",
            Mood::Anxious => "😟",
            Mood::Sad => "😔",
        }
    }

    /// Valence proxy, 1 (most negative) to 5 (most positive).
    pub fn score(self) -> u8 {
        match self {
            Mood::Joy => 5,
            Mood::Calm => 4,
            Mood::Ok => 3,
            Mood::Anxious => 2,
            Mood::Sad => 1,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Mood {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.key() == key)
            .ok_or_else(|| ParseError::Mood(key.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: Mood,
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub body: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct RecordMoodRequest {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodForm {
    pub mood: Option<String>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct ScreenForm {
    pub screen: String,
}

#[derive(Debug, Deserialize)]
pub struct GoalForm {
    pub goal: String,
}
