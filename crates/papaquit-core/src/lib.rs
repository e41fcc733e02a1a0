//! # PapaQuit Core Library
//!
//! Core business logic for PapaQuit, a smoking-cessation tracker for
//! dads-to-be that correlates smoke-free progress with fertility-friendly
//! lifestyle habits. The CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Progress engine**: pure functions over an injected `now` -- elapsed
//!   time, money saved, milestone detection, daily savings series, and the
//!   lifestyle score. No I/O, no hidden clock reads.
//! - **Storage**: SQLite log/settings persistence and TOML configuration
//! - **Notifications**: best-effort Discord webhook delivery
//!
//! ## Key Components
//!
//! - [`ProgressSnapshot`]: the dashboard read API
//! - [`Database`]: settings, logs, and achieved-milestone persistence
//! - [`Repository`]: the storage boundary the engine is written against
//! - [`DiscordNotifier`]: milestone and reminder messages

pub mod attempt;
pub mod error;
pub mod logs;
pub mod milestones;
pub mod notify;
pub mod progress;
pub mod repository;
pub mod savings;
pub mod score;
pub mod settings;
pub mod storage;
pub mod time;

pub use attempt::{AttemptHistory, QuitAttempt};
pub use error::{ConfigError, CoreError, DatabaseError};
pub use logs::{CravingLog, CravingStats, DailyLifestyleLog, DiaryEntry, Mood};
pub use milestones::{Milestone, MILESTONES};
pub use notify::DiscordNotifier;
pub use progress::ProgressSnapshot;
pub use repository::Repository;
pub use savings::{SavingsPoint, SavingsSeries};
pub use score::{daily_score, ScoreBand};
pub use settings::Settings;
pub use storage::{Config, Database};
pub use time::Elapsed;
