//! Timezone-fixed elapsed-time arithmetic.
//!
//! Every duration in the progress engine is measured against a single fixed
//! UTC+9 (JST) offset. Callers inject `now`; nothing in this module reads
//! the wall clock except the [`now_jst`] convenience used by the CLI glue.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// The fixed display/arithmetic timezone (UTC+9, no DST).
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset")
}

/// Current instant in the fixed JST offset. CLI-side convenience only;
/// the computation functions all take `now` as a parameter.
pub fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst())
}

/// Whole smoke-free days since the quit date, clamped at zero.
///
/// A quit date in the future (clock skew, bad input) yields 0, never a
/// negative count.
pub fn elapsed_days(quit_date: NaiveDate, now: DateTime<FixedOffset>) -> i64 {
    (now.date_naive() - quit_date).num_days().max(0)
}

/// Human-scale elapsed duration.
///
/// Under an hour the breakdown is in minutes, under a day in hours,
/// otherwise days plus remaining hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    Minutes(i64),
    Hours(i64),
    DaysHours { days: i64, hours: i64 },
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elapsed::Minutes(m) => write!(f, "{m} minutes"),
            Elapsed::Hours(h) => write!(f, "{h} hours"),
            Elapsed::DaysHours { days, hours } => write!(f, "{days} days {hours} hours"),
        }
    }
}

/// Fine-grained elapsed duration since midnight (JST) of the quit date.
///
/// Clamps to `Minutes(0)` when the quit date is in the future.
pub fn elapsed_fine(quit_date: NaiveDate, now: DateTime<FixedOffset>) -> Elapsed {
    let quit_midnight = quit_date.and_time(NaiveTime::MIN);
    let delta = now.naive_local() - quit_midnight;

    let total_minutes = delta.num_minutes().max(0);
    if total_minutes < 60 {
        return Elapsed::Minutes(total_minutes);
    }

    let total_hours = total_minutes / 60;
    if total_hours < 24 {
        return Elapsed::Hours(total_hours);
    }

    Elapsed::DaysHours {
        days: total_hours / 24,
        hours: total_hours % 24,
    }
}

/// Best-effort display of a persisted timestamp string.
///
/// Parses RFC 3339 and renders `YYYY-MM-DD HH:MM` in JST. A malformed
/// string degrades to a truncated copy of the raw text instead of an
/// error: this is historical display data, not a correctness path.
pub fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&jst()).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.chars().take(16).map(|c| if c == 'T' { ' ' } else { c }).collect(),
    }
}
