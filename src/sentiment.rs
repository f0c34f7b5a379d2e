use crate::models::{Sentiment, SentimentLabel};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::debug;

const POSITIVE_WORDS: [&str; 10] = [
    "happy",
    "good",
    "great",
    "amazing",
    "wonderful",
    "love",
    "excited",
    "perfect",
    "awesome",
    "fantastic",
];

const NEGATIVE_WORDS: [&str; 10] = [
    "sad",
    "bad",
    "terrible",
    "awful",
    "hate",
    "stressed",
    "worried",
    "overwhelmed",
    "depressed",
    "angry",
];

const POSITIVE_INSIGHTS: [&str; 3] = [
    "Your positive energy is shining through! Keep up the great work! ✨",
    "It's wonderful to see you feeling good. Remember to savor these moments! 🌟",
    "Your optimism is inspiring! Consider sharing this positive energy with others. 💫",
];

const NEGATIVE_INSIGHTS: [&str; 3] = [
    "It's okay to have difficult days. Remember, this feeling is temporary. 🤗",
    "Take some time for self-care today. You deserve kindness, especially from yourself. 💙",
    "Consider reaching out to someone you trust or try a calming activity. You're not alone. 🌱",
];

const NEUTRAL_INSIGHTS: [&str; 3] = [
    "Every day doesn't have to be extraordinary, and that's perfectly fine. 🌸",
    "Steady emotions can be a sign of balance. Take note of what's working for you. ⚖️",
    "Sometimes neutral is exactly what we need. Honor your current state. 🍃",
];

/// Number of whitespace-separated tokens containing at least one keyword.
fn count_hits(tokens: &[String], keywords: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|token| keywords.iter().any(|keyword| token.contains(keyword)))
        .count()
}

pub fn classify_label(text: &str) -> SentimentLabel {
    let tokens: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let positive = count_hits(&tokens, &POSITIVE_WORDS);
    let negative = count_hits(&tokens, &NEGATIVE_WORDS);

    if positive > negative {
        SentimentLabel::Positive
    } else if negative > positive {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Label is deterministic; the score is noise in [0.7, 1.0) for polar labels
/// and [0.5, 0.8) for neutral.
pub fn classify<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Sentiment {
    let label = classify_label(text);
    let base = match label {
        SentimentLabel::Positive | SentimentLabel::Negative => 0.7,
        SentimentLabel::Neutral => 0.5,
    };
    let score = base + rng.gen_range(0.0..0.3);
    Sentiment { label, score }
}

pub fn pick_insight<R: Rng + ?Sized>(label: SentimentLabel, rng: &mut R) -> &'static str {
    let pool: &[&'static str] = match label {
        SentimentLabel::Positive => &POSITIVE_INSIGHTS,
        SentimentLabel::Negative => &NEGATIVE_INSIGHTS,
        SentimentLabel::Neutral => &NEUTRAL_INSIGHTS,
    };
    pool.choose(rng).copied().unwrap_or(NEUTRAL_INSIGHTS[0])
}

/// Stands in for a remote sentiment model: waits `delay`, then classifies.
/// Once started the analysis always runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer {
    delay: Duration,
}

impl SentimentAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn analyze(&self, text: &str) -> Sentiment {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let sentiment = classify(text, &mut rand::thread_rng());
        debug!(label = ?sentiment.label, score = sentiment.score, "sentiment analyzed");
        sentiment
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}
