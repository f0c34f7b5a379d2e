use crate::models::{MoodEntry, Sentiment, SentimentLabel};
use crate::mood::Mood;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mood entries, newest first by insertion.
///
/// Entries are only ever added. Nothing here sorts by timestamp: recency-based
/// queries in `stats` do their own ordering, while date lookups honour the
/// stored order and return the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: Vec<MoodEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoodEntry> {
        self.entries.iter()
    }

    pub fn prepend(&mut self, entry: MoodEntry) {
        self.entries.insert(0, entry);
    }

    /// First entry, in stored order, whose `date` equals `date`.
    pub fn find_by_date(&self, date: &str) -> Option<&MoodEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    pub fn todays_entry(&self, now: DateTime<Utc>) -> Option<&MoodEntry> {
        self.find_by_date(&date_key(now))
    }

    /// Appends the demo entries to the end of the store.
    pub fn add_sample_data(&mut self, now: DateTime<Utc>) {
        self.entries.push(sample_entry(
            now - Duration::days(2),
            Mood::Neutral,
            "Just another day at work.",
            Sentiment {
                label: SentimentLabel::Neutral,
                score: 0.6,
            },
        ));
        self.entries.push(sample_entry(
            now - Duration::days(3),
            Mood::VeryHappy,
            "Got promoted today! So excited!",
            Sentiment {
                label: SentimentLabel::Positive,
                score: 0.95,
            },
        ));
    }
}

pub fn new_entry(
    now: DateTime<Utc>,
    mood: Mood,
    text: impl Into<String>,
    sentiment: Sentiment,
) -> MoodEntry {
    MoodEntry {
        id: Uuid::new_v4().to_string(),
        date: date_key(now),
        mood: mood.as_str().to_string(),
        text: text.into(),
        sentiment,
        timestamp: now,
    }
}

fn sample_entry(at: DateTime<Utc>, mood: Mood, text: &str, sentiment: Sentiment) -> MoodEntry {
    new_entry(at, mood, text, sentiment)
}

/// Calendar date of an instant, `YYYY-MM-DD` in UTC.
pub fn date_key(at: DateTime<Utc>) -> String {
    at.date_naive().format("%Y-%m-%d").to_string()
}
