//! Persisted log record types: daily lifestyle checklist, craving events,
//! and diary entries.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One calendar day's fertility-supportive habit checklist.
///
/// Upserted on same-day resubmission; at most one record per `log_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLifestyleLog {
    pub log_date: NaiveDate,
    /// Zinc supplement taken.
    pub zinc_taken: bool,
    /// Folate supplement taken.
    pub folate_taken: bool,
    /// Hours slept, 0.0 to 24.0.
    pub sleep_hours: f64,
    /// At least 20 minutes of exercise.
    pub exercised: bool,
    /// Self-reported stress, 1 (relaxed) to 5 (overwhelmed).
    pub stress_level: u8,
    #[serde(default)]
    pub notes: String,
}

/// An immutable record of one urge-to-smoke event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CravingLog {
    pub logged_at: DateTime<FixedOffset>,
    /// Urge strength, 1 (mild) to 5 (barely bearable).
    pub intensity: u8,
    /// What set the urge off (after a meal, stress, alcohol, ...).
    pub trigger: String,
    /// Whether the urge was resisted.
    pub resisted: bool,
    /// Optional note to the future child.
    #[serde(default)]
    pub message: String,
}

/// Aggregate view over a craving history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CravingStats {
    pub total: u64,
    pub resisted: u64,
    /// Whole-percent resistance success rate (0 when no logs exist).
    pub success_rate: u8,
}

impl CravingStats {
    pub fn from_logs(logs: &[CravingLog]) -> Self {
        let total = logs.len() as u64;
        let resisted = logs.iter().filter(|l| l.resisted).count() as u64;
        let success_rate = if total > 0 {
            (resisted * 100 / total) as u8
        } else {
            0
        };
        Self {
            total,
            resisted,
            success_rate,
        }
    }
}

/// Mood attached to a diary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Tough,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Tough => "tough",
        }
    }

    /// Parse a persisted mood string, defaulting to `Neutral` for
    /// unrecognized historical values.
    pub fn parse_lossy(raw: &str) -> Self {
        match raw {
            "happy" => Mood::Happy,
            "tough" => Mood::Tough,
            _ => Mood::Neutral,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Happy => "😄",
            Mood::Neutral => "😐",
            Mood::Tough => "😔",
        }
    }
}

/// A dated message written for the future child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub entry_date: NaiveDate,
    pub mood: Mood,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn craving(resisted: bool) -> CravingLog {
        CravingLog {
            logged_at: crate::time::jst()
                .with_ymd_and_hms(2024, 1, 5, 21, 30, 0)
                .unwrap(),
            intensity: 3,
            trigger: "after dinner".into(),
            resisted,
            message: String::new(),
        }
    }

    #[test]
    fn stats_over_empty_history() {
        let stats = CravingStats::from_logs(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.success_rate, 0);
    }

    #[test]
    fn stats_count_resisted_cravings() {
        let logs = vec![craving(true), craving(true), craving(false), craving(true)];
        let stats = CravingStats::from_logs(&logs);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.resisted, 3);
        assert_eq!(stats.success_rate, 75);
    }

    #[test]
    fn mood_round_trips_and_degrades() {
        assert_eq!(Mood::parse_lossy("happy"), Mood::Happy);
        assert_eq!(Mood::parse_lossy("tough"), Mood::Tough);
        assert_eq!(Mood::parse_lossy("???"), Mood::Neutral);
        assert_eq!(Mood::Happy.as_str(), "happy");
    }
}
