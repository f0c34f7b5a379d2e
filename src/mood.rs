use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const NEUTRAL_VALUE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    VerySad,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::VerySad,
        Mood::Sad,
        Mood::Neutral,
        Mood::Happy,
        Mood::VeryHappy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::VerySad => "very-sad",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Happy => "happy",
            Mood::VeryHappy => "very-happy",
        }
    }

    /// Position on the 1..=5 scale.
    pub fn value(self) -> u8 {
        match self {
            Mood::VerySad => 1,
            Mood::Sad => 2,
            Mood::Neutral => 3,
            Mood::Happy => 4,
            Mood::VeryHappy => 5,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::VerySad => "😢",
            Mood::Sad => "😞",
            Mood::Neutral => "😐",
            Mood::Happy => "🙂",
            Mood::VeryHappy => "😄",
        }
    }

    /// Label shown to the user, e.g. "very happy".
    pub fn display_label(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl fmt::Display for UnknownMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mood '{}'", self.0)
    }
}

impl std::error::Error for UnknownMood {}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Maps a raw mood label onto the 1..=5 scale. Anything unrecognised counts as neutral.
pub fn mood_to_value(label: &str) -> u8 {
    label.parse::<Mood>().map(Mood::value).unwrap_or(NEUTRAL_VALUE)
}

pub fn mood_emoji(label: &str) -> &'static str {
    label.parse::<Mood>().unwrap_or(Mood::Neutral).emoji()
}
