//! Storage boundary consumed by the progress engine.
//!
//! The computation modules never touch storage directly; the CLI (or any
//! other front end) goes through this trait. [`crate::storage::Database`]
//! is the SQLite implementation.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::attempt::AttemptHistory;
use crate::error::Result;
use crate::logs::{CravingLog, DailyLifestyleLog, DiaryEntry};
use crate::settings::Settings;

/// Persistence operations the tracker needs.
///
/// Milestone recording is an idempotent upsert: recording the same key
/// twice leaves the achieved-set unchanged. Craving logs and diary entries
/// are append-only; the daily lifestyle log upserts per calendar day.
pub trait Repository {
    /// The active settings record, if the user has configured one.
    fn load_settings(&self) -> Result<Option<Settings>>;

    /// Overwrite the active settings record (creates it on first save).
    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Keys of milestones already recorded as achieved.
    fn load_achieved_milestone_keys(&self) -> Result<HashSet<String>>;

    /// Record a milestone as achieved. Idempotent.
    fn record_milestone_achieved(&self, key: &str) -> Result<()>;

    /// Lifestyle logs, newest first, optionally limited.
    fn load_lifestyle_logs(&self, limit: Option<u32>) -> Result<Vec<DailyLifestyleLog>>;

    /// The lifestyle log for one calendar day, if recorded.
    fn load_lifestyle_log(&self, log_date: NaiveDate) -> Result<Option<DailyLifestyleLog>>;

    /// Insert or replace the log for its calendar day.
    fn upsert_lifestyle_log(&self, log: &DailyLifestyleLog) -> Result<()>;

    /// Craving logs, newest first.
    fn load_craving_logs(&self) -> Result<Vec<CravingLog>>;

    /// Append a craving log. Immutable once written.
    fn add_craving_log(&self, log: &CravingLog) -> Result<()>;

    /// Full attempt history, oldest first.
    fn load_quit_attempts(&self) -> Result<AttemptHistory>;

    /// Replace the stored attempt history with `history`.
    fn save_quit_attempts(&self, history: &AttemptHistory) -> Result<()>;

    /// Diary entries, newest first.
    fn load_diary_entries(&self) -> Result<Vec<DiaryEntry>>;

    /// Append a diary entry.
    fn add_diary_entry(&self, entry: &DiaryEntry) -> Result<()>;
}
