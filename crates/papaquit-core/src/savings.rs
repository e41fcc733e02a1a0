//! Money-saved and cigarettes-avoided arithmetic.
//!
//! All amounts are yen. A pack price divided by the pack size gives the
//! per-cigarette unit price; everything else is day-count multiplication.
//! Callers are expected to have run [`Settings::validate`] first; these
//! functions treat the settings as trusted input.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::settings::Settings;

/// Price of a single cigarette in yen (real-valued).
pub fn unit_price(settings: &Settings) -> f64 {
    f64::from(settings.price_per_pack) / f64::from(settings.cigarettes_per_pack)
}

/// Yen saved over `days` smoke-free days, floored to a whole amount.
pub fn money_saved(settings: &Settings, days: i64) -> i64 {
    let days = days.max(0);
    (days as f64 * f64::from(settings.cigarettes_per_day) * unit_price(settings)).floor() as i64
}

/// Cigarettes not smoked over `days` smoke-free days.
pub fn cigarettes_avoided(settings: &Settings, days: i64) -> i64 {
    days.max(0) * i64::from(settings.cigarettes_per_day)
}

/// One calendar day in the cumulative savings series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsPoint {
    pub date: NaiveDate,
    /// Yen added by this day (0 for the quit day itself).
    pub daily: i64,
    /// Total yen saved through this day; equals `money_saved` for the
    /// day's elapsed count.
    pub cumulative: i64,
}

/// Lazy cumulative savings series from the quit date through `today`,
/// one entry per calendar day.
///
/// The quit-day entry contributes nothing: no full day has passed yet.
/// Restartable via `Clone`; charting callers can iterate repeatedly.
#[derive(Debug, Clone)]
pub struct SavingsSeries {
    settings: Settings,
    next_day: i64,
    last_day: i64,
    prev_cumulative: i64,
}

impl Iterator for SavingsSeries {
    type Item = SavingsPoint;

    fn next(&mut self) -> Option<SavingsPoint> {
        if self.next_day > self.last_day {
            return None;
        }
        let day = self.next_day;
        self.next_day += 1;

        let date = self
            .settings
            .quit_date
            .checked_add_days(Days::new(day as u64))?;
        let cumulative = money_saved(&self.settings, day);
        let daily = cumulative - self.prev_cumulative;
        self.prev_cumulative = cumulative;

        Some(SavingsPoint {
            date,
            daily,
            cumulative,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_day - self.next_day + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SavingsSeries {}

/// Build the savings series covering every day from the quit date through
/// `today` inclusive. A quit date after `today` yields an empty series.
pub fn daily_series(settings: &Settings, today: NaiveDate) -> SavingsSeries {
    let last_day = (today - settings.quit_date).num_days();
    SavingsSeries {
        settings: settings.clone(),
        next_day: 0,
        last_day,
        prev_cumulative: 0,
    }
}

/// Format a yen amount with thousands separators, e.g. `¥6,000`.
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}
