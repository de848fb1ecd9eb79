use crate::models::JournalEntry;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

const PROMPTS: [&str; 4] = [
    "What emotion stands out to you right now?",
    "What gave you energy today?",
    "What do you want to let go of?",
    "A small win I'm proud of:",
];

/// Prepend-only journal, newest first.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, body: &str) -> Option<JournalEntry> {
        self.save_at(body, Utc::now())
    }

    pub fn save_at(&mut self, body: &str, at: DateTime<Utc>) -> Option<JournalEntry> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        let entry = JournalEntry {
            id: Uuid::new_v4(),
            body: body.to_string(),
            at,
        };
        self.entries.push_front(entry.clone());
        Some(entry)
    }

    /// Writing prompt, advancing with every saved entry.
    pub fn prompt(&self) -> &'static str {
        PROMPTS[self.entries.len() % PROMPTS.len()]
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &JournalEntry> {
        self.entries.iter()
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

    #[test]
    fn blank_body_is_noop() {
        let mut journal = Journal::new();
        assert!(journal.save("").is_none());
        assert!(journal.save(" \t\n ").is_none());
        assert!(journal.is_empty());
    }

    #[test]
    fn body_is_trimmed() {
        let mut journal = Journal::new();
        let entry = journal.save("  text  ").unwrap();
        assert_eq!(entry.body, "text");
        assert_eq!(journal.entries().next().map(|e| e.body.as_str()), Some("text"));
    }

    #[test]
    fn newest_entry_first() {
        let mut journal = Journal::new();
        journal.save("first");
        journal.save("second");
        let bodies: Vec<&str> = journal.entries().map(|e| e.body.as_str()).collect();
        assert_eq!(bodies, vec!["second", "first"]);
    }

    #[test]
    fn prompt_rotates_with_entry_count() {
        let mut journal = Journal::new();
        assert_eq!(journal.prompt(), PROMPTS[0]);
        journal.save("one");
        assert_eq!(journal.prompt(), PROMPTS[1]);
        journal.save("   ");
        assert_eq!(journal.prompt(), PROMPTS[1]);
        for body in ["two", "three", "four"] {
            journal.save(body);
        }
        assert_eq!(journal.prompt(), PROMPTS[0]);
    }
}
