use crate::charts::last_7_days_at;
use crate::models::{AppData, DashboardResponse, MoodEntry};
use crate::store::EntryStore;
use chrono::{DateTime, Duration, Local, Timelike, Utc};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Returned when nothing was logged in the last seven days.
pub const EMPTY_WEEK_AVERAGE: f64 = 0.5;

pub fn build_dashboard(data: &AppData) -> DashboardResponse {
    let now = Utc::now();
    build_dashboard_at(now, now.with_timezone(&Local).hour(), data)
}

/// `local_hour` is the wall-clock hour used for the greeting; dates and
/// windows are computed from `now` in UTC.
pub fn build_dashboard_at(
    now: DateTime<Utc>,
    local_hour: u32,
    data: &AppData,
) -> DashboardResponse {
    let weekly_average = weekly_average(&data.entries, now);
    DashboardResponse {
        greeting: greeting(local_hour).to_string(),
        name: data.user.name.clone(),
        today: data.entries.todays_entry(now).cloned(),
        weekly_average,
        weekly_positive_percent: positive_percent(weekly_average),
        streak_days: streak(&data.entries, now),
        last_7_days: last_7_days_at(now, &data.entries),
    }
}

/// Mean mood value over entries stamped within the last seven days, divided by 5.
pub fn weekly_average(store: &EntryStore, now: DateTime<Utc>) -> f64 {
    let week_ago = now - Duration::days(7);
    let (sum, count) = store
        .iter()
        .filter(|entry| entry.timestamp >= week_ago)
        .fold((0u64, 0u64), |(sum, count), entry| {
            (sum + u64::from(entry.mood_value()), count + 1)
        });

    if count == 0 {
        return EMPTY_WEEK_AVERAGE;
    }
    (sum as f64 / count as f64) / 5.0
}

/// Percentage shown on the dashboard. The `* 20` scaling is the displayed
/// figure, so an all-"very sad" week still reads as 4%.
pub fn positive_percent(weekly_average: f64) -> u32 {
    (weekly_average * 20.0).round() as u32
}

/// Consecutive days with an entry, counting back from `now`.
///
/// Entries are walked newest first; the entry at each step must be exactly
/// `streak` whole days old for the streak to grow.
pub fn streak(store: &EntryStore, now: DateTime<Utc>) -> u32 {
    let mut sorted: Vec<&MoodEntry> = store.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut streak = 0u32;
    for entry in sorted {
        let days_diff = (now - entry.timestamp)
            .num_milliseconds()
            .div_euclid(MS_PER_DAY);
        if days_diff == i64::from(streak) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sentiment, SentimentLabel};
    use crate::mood::Mood;
    use crate::store::new_entry;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, 18, 30, 0).unwrap()
    }

    fn store_of(items: &[(i64, Mood)]) -> EntryStore {
        let mut store = EntryStore::new();
        for (hours_ago, mood) in items {
            store.prepend(new_entry(
                now() - Duration::hours(*hours_ago),
                *mood,
                "entry",
                Sentiment {
                    label: SentimentLabel::Neutral,
                    score: 0.6,
                },
            ));
        }
        store
    }

    #[test]
    fn weekly_average_defaults_when_window_is_empty() {
        assert_eq!(weekly_average(&EntryStore::new(), now()), 0.5);

        let stale = store_of(&[(24 * 8, Mood::VeryHappy)]);
        assert_eq!(weekly_average(&stale, now()), 0.5);
    }

    #[test]
    fn weekly_average_normalises_by_five() {
        let top = store_of(&[(1, Mood::VeryHappy), (30, Mood::VeryHappy)]);
        assert_eq!(weekly_average(&top, now()), 1.0);

        let bottom = store_of(&[(1, Mood::VerySad), (50, Mood::VerySad)]);
        assert!((weekly_average(&bottom, now()) - 0.2).abs() < 1e-12);

        let mixed = store_of(&[(1, Mood::Happy), (2, Mood::Sad), (24 * 9, Mood::VerySad)]);
        assert!((weekly_average(&mixed, now()) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn weekly_window_includes_exact_boundary() {
        let edge = store_of(&[(24 * 7, Mood::VeryHappy)]);
        assert_eq!(weekly_average(&edge, now()), 1.0);
    }

    #[test]
    fn positive_percent_keeps_display_scaling() {
        assert_eq!(positive_percent(0.5), 10);
        assert_eq!(positive_percent(1.0), 20);
        assert_eq!(positive_percent(0.2), 4);
    }

    #[test]
    fn streak_counts_contiguous_days() {
        let store = store_of(&[(48, Mood::Sad), (24, Mood::Happy), (0, Mood::Neutral)]);
        assert_eq!(streak(&store, now()), 3);
    }

    #[test]
    fn streak_breaks_on_gap() {
        let store = store_of(&[(48, Mood::Sad), (0, Mood::Neutral)]);
        assert_eq!(streak(&store, now()), 1);
    }

    #[test]
    fn streak_is_zero_without_entries() {
        assert_eq!(streak(&EntryStore::new(), now()), 0);
    }

    #[test]
    fn streak_uses_timestamps_not_insertion_order() {
        let mut store = store_of(&[(0, Mood::Happy)]);
        // Older entry inserted last, so it sits at the front.
        store.prepend(new_entry(
            now() - Duration::hours(25),
            Mood::Sad,
            "late",
            Sentiment {
                label: SentimentLabel::Negative,
                score: 0.8,
            },
        ));
        assert_eq!(streak(&store, now()), 2);
    }

    #[test]
    fn streak_stops_at_second_entry_on_same_day() {
        let store = store_of(&[(2, Mood::Sad), (1, Mood::Happy)]);
        assert_eq!(streak(&store, now()), 1);
    }

    #[test]
    fn streak_ignores_future_entries() {
        let store = store_of(&[(-3, Mood::Happy)]);
        assert_eq!(streak(&store, now()), 0);
    }

    #[test]
    fn greeting_by_hour() {
        assert_eq!(greeting(0), "Good morning");
        assert_eq!(greeting(11), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(16), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
    }

    #[test]
    fn dashboard_greets_by_local_hour_not_utc() {
        // 18:30 UTC is 10:30 at UTC-8.
        let dashboard = build_dashboard_at(now(), 10, &AppData::default());
        assert_eq!(dashboard.greeting, "Good morning");
        assert_eq!(dashboard.last_7_days[6].date, "2026-01-05");
    }

    #[test]
    fn unknown_labels_average_as_neutral() {
        let mut store = store_of(&[(1, Mood::VeryHappy)]);
        let mut odd = store.entries()[0].clone();
        odd.mood = "ecstatic".to_string();
        store.prepend(odd);
        // (5 + 3) / 2 / 5
        assert!((weekly_average(&store, now()) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn dashboard_combines_views() {
        let data = AppData {
            entries: store_of(&[(24, Mood::Happy), (0, Mood::VeryHappy)]),
            ..AppData::default()
        };
        let dashboard = build_dashboard_at(now(), 18, &data);

        assert_eq!(dashboard.greeting, "Good evening");
        assert_eq!(dashboard.name, "Katie");
        assert_eq!(
            dashboard.today.and_then(|entry| entry.known_mood()),
            Some(Mood::VeryHappy)
        );
        assert_eq!(dashboard.streak_days, 2);
        assert!((dashboard.weekly_average - 0.9).abs() < 1e-12);
        assert_eq!(dashboard.weekly_positive_percent, 18);
        assert_eq!(dashboard.last_7_days.len(), 7);
        assert_eq!(dashboard.last_7_days[6].value, 5);
        assert_eq!(dashboard.last_7_days[5].value, 4);
    }
}
