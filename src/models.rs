use crate::mood::{Mood, mood_to_value};
use crate::store::EntryStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_lowercase(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    /// "87% positive"
    pub fn summary(&self) -> String {
        format!(
            "{}% {}",
            (self.score * 100.0).round() as i64,
            self.label.as_lowercase()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub date: String,
    /// Raw label as stored. Normally one of the five `Mood` labels, but
    /// entries loaded from disk may carry anything.
    pub mood: String,
    pub text: String,
    pub sentiment: Sentiment,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn mood_value(&self) -> u8 {
        mood_to_value(&self.mood)
    }

    pub fn known_mood(&self) -> Option<Mood> {
        self.mood.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub is_premium: bool,
    pub avatar: String,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            name: "Katie".to_string(),
            email: "katie@example.com".to_string(),
            is_premium: false,
            avatar: "👩‍💻".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub daily_reminders: bool,
    pub weekly_reports: bool,
    pub share_data: bool,
    pub ai_analysis: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            weekly_reports: true,
            share_data: true,
            ai_analysis: true,
        }
    }
}

/// Everything persisted to the data file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub user: UserData,
    #[serde(default)]
    pub entries: EntryStore,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub mood: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewEntryResponse {
    pub entry: MoodEntry,
    pub insight: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMoodPoint {
    pub date: String,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMoodPoint {
    pub date: String,
    pub value: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodGroup {
    Happy,
    Sad,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: MoodGroup,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub greeting: String,
    pub name: String,
    pub today: Option<MoodEntry>,
    pub weekly_average: f64,
    pub weekly_positive_percent: u32,
    pub streak_days: u32,
    pub last_7_days: Vec<DailyMoodPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub last_7_days: Vec<DailyMoodPoint>,
    pub last_30_days: Vec<MonthlyMoodPoint>,
    pub distribution: Vec<DistributionSlice>,
}
