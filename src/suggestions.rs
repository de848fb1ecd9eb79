use crate::models::Mood;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeCard {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const PRACTICES: [PracticeCard; 4] = [
    PracticeCard {
        title: "Breathing",
        subtitle: "2-minute box breathing",
    },
    PracticeCard {
        title: "Meditation",
        subtitle: "5-minute body scan",
    },
    PracticeCard {
        title: "Affirmations",
        subtitle: "3 gentle reminders",
    },
    PracticeCard {
        title: "Stretch",
        subtitle: "Neck & shoulder release",
    },
];

pub const GENTLE_MESSAGE: &str =
    "I noticed your recent moods. Would you like a 3-minute guided breathing to reset?";

/// Static suggestion for the most recent mood.
pub fn suggest(latest: Option<Mood>) -> Suggestion {
    match latest {
        Some(Mood::Anxious) => Suggestion {
            title: "Grounding 5-4-3-2-1",
            detail: "Notice 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste.",
        },
        Some(Mood::Sad) => Suggestion {
            title: "Self-kindness note",
            detail: "Write a gentle message to yourself like you would to a close friend.",
        },
        Some(Mood::Joy) => Suggestion {
            title: "Savor the moment",
            detail: "Close your eyes and relive a joyful moment for 30 seconds.",
        },
        Some(Mood::Ok) | Some(Mood::Calm) | None => Suggestion {
            title: "Take a mindful breath",
            detail: "Inhale 4s, hold 4s, exhale 4s. Repeat 4 times.",
        },
    }
}
