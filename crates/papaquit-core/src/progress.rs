//! Progress facade: the one read API a presentation layer needs.
//!
//! Composes the elapsed-time, savings, and milestone modules into a single
//! immutable snapshot. Performs no I/O; settings and `now` are supplied by
//! the caller.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::Result;
use crate::milestones::{self, Milestone};
use crate::savings;
use crate::settings::Settings;
use crate::time::{self, Elapsed};

/// Everything the dashboard shows about the current attempt, computed at
/// one instant.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub elapsed_days: i64,
    #[serde(serialize_with = "serialize_elapsed")]
    pub elapsed: Elapsed,
    /// Yen saved so far.
    pub money_saved: i64,
    pub cigarettes_avoided: i64,
    pub achieved_milestones: &'static [Milestone],
    pub next_milestone: Option<&'static Milestone>,
    /// Days until the next milestone; `None` in the terminal state.
    pub remaining_days_to_next: Option<i64>,
}

fn serialize_elapsed<S: serde::Serializer>(e: &Elapsed, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(e)
}

impl ProgressSnapshot {
    /// Compute the snapshot for `settings` as of `now`.
    ///
    /// # Errors
    /// Fails fast with `InvalidConfiguration` before any arithmetic if the
    /// settings are unusable.
    pub fn compute(settings: &Settings, now: DateTime<FixedOffset>) -> Result<Self> {
        settings.validate()?;

        let elapsed_days = time::elapsed_days(settings.quit_date, now);
        let next_milestone = milestones::next(elapsed_days);

        Ok(Self {
            elapsed_days,
            elapsed: time::elapsed_fine(settings.quit_date, now),
            money_saved: savings::money_saved(settings, elapsed_days),
            cigarettes_avoided: savings::cigarettes_avoided(settings, elapsed_days),
            achieved_milestones: milestones::achieved(elapsed_days),
            next_milestone,
            remaining_days_to_next: next_milestone.map(|m| m.remaining_from(elapsed_days)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn settings(quit: NaiveDate) -> Settings {
        Settings {
            quit_date: quit,
            cigarettes_per_day: 20,
            price_per_pack: 600,
            cigarettes_per_pack: 20,
        }
    }

    fn jst_noon(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        crate::time::jst().with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn quit_day_snapshot() {
        let quit = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snap = ProgressSnapshot::compute(&settings(quit), jst_noon(2024, 1, 1)).unwrap();

        assert_eq!(snap.elapsed_days, 0);
        assert_eq!(snap.money_saved, 0);
        assert_eq!(snap.cigarettes_avoided, 0);
        assert!(snap.achieved_milestones.is_empty());
        assert_eq!(snap.next_milestone.unwrap().key, "day_1");
        assert_eq!(snap.remaining_days_to_next, Some(1));
    }

    #[test]
    fn ten_day_snapshot() {
        let quit = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snap = ProgressSnapshot::compute(&settings(quit), jst_noon(2024, 1, 11)).unwrap();

        assert_eq!(snap.elapsed_days, 10);
        assert_eq!(snap.money_saved, 6000);
        assert_eq!(snap.cigarettes_avoided, 200);
        let keys: Vec<_> = snap.achieved_milestones.iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["day_1", "day_3", "day_7"]);
        assert_eq!(snap.next_milestone.unwrap().key, "day_14");
        assert_eq!(snap.remaining_days_to_next, Some(4));
    }

    #[test]
    fn terminal_snapshot_has_no_next_milestone() {
        let quit = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let snap = ProgressSnapshot::compute(&settings(quit), jst_noon(2024, 6, 1)).unwrap();

        assert_eq!(snap.achieved_milestones.len(), 10);
        assert!(snap.next_milestone.is_none());
        assert!(snap.remaining_days_to_next.is_none());
    }

    #[test]
    fn future_quit_date_clamps_to_day_zero() {
        let quit = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let snap = ProgressSnapshot::compute(&settings(quit), jst_noon(2024, 1, 1)).unwrap();

        assert_eq!(snap.elapsed_days, 0);
        assert_eq!(snap.money_saved, 0);
        assert_eq!(snap.elapsed, Elapsed::Minutes(0));
    }

    #[test]
    fn invalid_settings_fail_fast() {
        let quit = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut s = settings(quit);
        s.cigarettes_per_pack = 0;
        assert!(ProgressSnapshot::compute(&s, jst_noon(2024, 1, 11)).is_err());
    }

    #[test]
    fn snapshot_serializes_for_the_cli() {
        let quit = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snap = ProgressSnapshot::compute(&settings(quit), jst_noon(2024, 1, 11)).unwrap();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["money_saved"], 6000);
        assert_eq!(json["next_milestone"]["key"], "day_14");
    }
}
