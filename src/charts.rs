use crate::models::{
    AnalyticsResponse, AppData, DailyMoodPoint, DistributionSlice, MonthlyMoodPoint, MoodGroup,
};
use crate::mood::NEUTRAL_VALUE;
use crate::store::{EntryStore, date_key};
use chrono::{DateTime, Duration, Utc};

pub fn build_analytics(data: &AppData) -> AnalyticsResponse {
    build_analytics_at(Utc::now(), data)
}

pub fn build_analytics_at(now: DateTime<Utc>, data: &AppData) -> AnalyticsResponse {
    AnalyticsResponse {
        last_7_days: last_7_days_at(now, &data.entries),
        last_30_days: last_30_days_at(now, &data.entries),
        distribution: distribution(&data.entries),
    }
}

/// Date keys for the `days` calendar days ending today, oldest first.
fn trailing_dates(now: DateTime<Utc>, days: i64) -> impl Iterator<Item = String> {
    (0..days)
        .rev()
        .map(move |offset| date_key(now - Duration::days(offset)))
}

/// Seven points, one per day; days without an entry read as neutral.
pub fn last_7_days_at(now: DateTime<Utc>, store: &EntryStore) -> Vec<DailyMoodPoint> {
    trailing_dates(now, 7)
        .map(|date| {
            let value = store
                .find_by_date(&date)
                .map(|entry| entry.mood_value())
                .unwrap_or(NEUTRAL_VALUE);
            DailyMoodPoint { date, value }
        })
        .collect()
}

/// Thirty points, one per day; days without an entry are `None`, so a missing
/// day stays distinguishable from a neutral one.
pub fn last_30_days_at(now: DateTime<Utc>, store: &EntryStore) -> Vec<MonthlyMoodPoint> {
    trailing_dates(now, 30)
        .map(|date| {
            let value = store.find_by_date(&date).map(|entry| entry.mood_value());
            MonthlyMoodPoint { date, value }
        })
        .collect()
}

/// Mood counts over the whole history, folded into Happy/Sad/Neutral.
/// Unrecognised labels count as neutral. Empty groups are left out.
pub fn distribution(store: &EntryStore) -> Vec<DistributionSlice> {
    let (mut happy, mut sad, mut neutral) = (0u64, 0u64, 0u64);
    for entry in store.iter() {
        match entry.mood_value() {
            4 | 5 => happy += 1,
            1 | 2 => sad += 1,
            _ => neutral += 1,
        }
    }

    [
        (MoodGroup::Happy, happy),
        (MoodGroup::Sad, sad),
        (MoodGroup::Neutral, neutral),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(name, count)| DistributionSlice { name, count })
    .collect()
}
