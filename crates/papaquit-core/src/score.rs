//! Daily fertility-lifestyle score.
//!
//! A day's checklist maps onto a 0-100 score through fixed additive
//! weights. Every bucket is all-or-nothing; no partial credit.

use serde::Serialize;

use crate::logs::DailyLifestyleLog;

const ZINC_POINTS: u8 = 25;
const FOLATE_POINTS: u8 = 25;
const EXERCISE_POINTS: u8 = 25;
const SLEEP_POINTS: u8 = 15;
const STRESS_POINTS: u8 = 10;

/// Sleep window that earns the sleep bucket, hours, both ends inclusive.
const SLEEP_RANGE: (f64, f64) = (6.0, 9.0);

/// Stress at or below this level earns the stress bucket.
const LOW_STRESS_MAX: u8 = 2;

/// Score a day's checklist. Deterministic and pure; always in [0, 100].
pub fn daily_score(log: &DailyLifestyleLog) -> u8 {
    let mut score = 0;
    if log.zinc_taken {
        score += ZINC_POINTS;
    }
    if log.folate_taken {
        score += FOLATE_POINTS;
    }
    if log.exercised {
        score += EXERCISE_POINTS;
    }
    if log.sleep_hours >= SLEEP_RANGE.0 && log.sleep_hours <= SLEEP_RANGE.1 {
        score += SLEEP_POINTS;
    }
    if log.stress_level <= LOW_STRESS_MAX {
        score += STRESS_POINTS;
    }
    score
}

/// Presentation band for a daily score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 80 and above.
    Excellent,
    /// 50 through 79.
    Good,
    /// Below 50.
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            50..=79 => ScoreBand::Good,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::NeedsImprovement => "needs improvement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn log(zinc: bool, folate: bool, sleep: f64, exercised: bool, stress: u8) -> DailyLifestyleLog {
        DailyLifestyleLog {
            log_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            zinc_taken: zinc,
            folate_taken: folate,
            sleep_hours: sleep,
            exercised,
            stress_level: stress,
            notes: String::new(),
        }
    }

    #[test]
    fn perfect_day_scores_100() {
        assert_eq!(daily_score(&log(true, true, 7.5, true, 1)), 100);
    }

    #[test]
    fn worst_day_scores_0() {
        assert_eq!(daily_score(&log(false, false, 0.0, false, 5)), 0);
    }

    #[test]
    fn sleep_window_is_inclusive_at_both_ends() {
        assert_eq!(daily_score(&log(false, false, 6.0, false, 5)), 15);
        assert_eq!(daily_score(&log(false, false, 9.0, false, 5)), 15);
        assert_eq!(daily_score(&log(false, false, 9.01, false, 5)), 0);
        assert_eq!(daily_score(&log(false, false, 5.99, false, 5)), 0);
    }

    #[test]
    fn stress_bucket_cuts_off_above_two() {
        assert_eq!(daily_score(&log(false, false, 0.0, false, 2)), 10);
        assert_eq!(daily_score(&log(false, false, 0.0, false, 3)), 0);
    }

    #[test]
    fn buckets_are_additive() {
        assert_eq!(daily_score(&log(true, false, 0.0, false, 5)), 25);
        assert_eq!(daily_score(&log(true, true, 0.0, false, 5)), 50);
        assert_eq!(daily_score(&log(true, true, 0.0, true, 5)), 75);
    }

    #[test]
    fn band_boundaries_are_inclusive_at_the_bottom() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::NeedsImprovement);
    }

    proptest! {
        #[test]
        fn score_is_always_in_bounds(
            zinc in any::<bool>(),
            folate in any::<bool>(),
            sleep in 0.0f64..24.0,
            exercised in any::<bool>(),
            stress in 1u8..=5,
        ) {
            let score = daily_score(&log(zinc, folate, sleep, exercised, stress));
            prop_assert!(score <= 100);
        }
    }
}
