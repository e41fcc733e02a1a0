//! SQLite persistence for the tracker.
//!
//! One small database at `~/.config/papaquit/papaquit.db` holding the
//! settings record, the achieved-milestone set, daily lifestyle logs,
//! craving logs, diary entries, and the quit-attempt history.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension};

use crate::attempt::{AttemptHistory, QuitAttempt};
use crate::error::{DatabaseError, Result};
use crate::logs::{CravingLog, DailyLifestyleLog, DiaryEntry, Mood};
use crate::repository::Repository;
use crate::settings::Settings;

use super::data_dir;

const DATE_FMT: &str = "%Y-%m-%d";

/// SQLite database implementing [`Repository`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/papaquit/papaquit.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("papaquit.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS user_settings (
                    id                  INTEGER PRIMARY KEY CHECK (id = 1),
                    quit_date           TEXT NOT NULL,
                    cigarettes_per_day  INTEGER NOT NULL,
                    price_per_pack      INTEGER NOT NULL,
                    cigarettes_per_pack INTEGER NOT NULL DEFAULT 20
                );

                CREATE TABLE IF NOT EXISTS achieved_milestones (
                    milestone_key TEXT PRIMARY KEY
                );

                CREATE TABLE IF NOT EXISTS fertility_logs (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    log_date    TEXT NOT NULL UNIQUE,
                    zinc        INTEGER NOT NULL,
                    folate      INTEGER NOT NULL,
                    sleep_hours REAL NOT NULL,
                    exercise    INTEGER NOT NULL,
                    stress      INTEGER NOT NULL,
                    notes       TEXT NOT NULL DEFAULT ''
                );

                CREATE TABLE IF NOT EXISTS craving_logs (
                    id        INTEGER PRIMARY KEY AUTOINCREMENT,
                    logged_at TEXT NOT NULL,
                    intensity INTEGER NOT NULL,
                    \"trigger\" TEXT NOT NULL,
                    resisted  INTEGER NOT NULL,
                    message   TEXT NOT NULL DEFAULT ''
                );

                CREATE TABLE IF NOT EXISTS diary_entries (
                    id         INTEGER PRIMARY KEY AUTOINCREMENT,
                    entry_date TEXT NOT NULL,
                    mood       TEXT NOT NULL,
                    message    TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS quit_attempts (
                    id          INTEGER PRIMARY KEY AUTOINCREMENT,
                    started_on  TEXT NOT NULL,
                    ended_on    TEXT,
                    days_lasted INTEGER
                );

                CREATE INDEX IF NOT EXISTS idx_fertility_logs_log_date ON fertility_logs(log_date);
                CREATE INDEX IF NOT EXISTS idx_craving_logs_logged_at ON craving_logs(logged_at);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }
}

fn parse_date(table: &'static str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FMT).map_err(|e| {
        DatabaseError::CorruptRow {
            table,
            message: format!("bad date '{raw}': {e}"),
        }
        .into()
    })
}

impl Repository for Database {
    fn load_settings(&self) -> Result<Option<Settings>> {
        let row = self
            .conn
            .query_row(
                "SELECT quit_date, cigarettes_per_day, price_per_pack, cigarettes_per_pack
                 FROM user_settings WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, u32>(1)?,
                        row.get::<_, u32>(2)?,
                        row.get::<_, u32>(3)?,
                    ))
                },
            )
            .optional()
            .map_err(DatabaseError::from)?;

        match row {
            None => Ok(None),
            Some((quit_date, cigarettes_per_day, price_per_pack, cigarettes_per_pack)) => {
                Ok(Some(Settings {
                    quit_date: parse_date("user_settings", &quit_date)?,
                    cigarettes_per_day,
                    price_per_pack,
                    cigarettes_per_pack,
                }))
            }
        }
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        settings.validate()?;
        self.conn.execute(
            "INSERT INTO user_settings (id, quit_date, cigarettes_per_day, price_per_pack, cigarettes_per_pack)
             VALUES (1, ?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                quit_date = excluded.quit_date,
                cigarettes_per_day = excluded.cigarettes_per_day,
                price_per_pack = excluded.price_per_pack,
                cigarettes_per_pack = excluded.cigarettes_per_pack",
            params![
                settings.quit_date.format(DATE_FMT).to_string(),
                settings.cigarettes_per_day,
                settings.price_per_pack,
                settings.cigarettes_per_pack,
            ],
        )?;
        Ok(())
    }

    fn load_achieved_milestone_keys(&self) -> Result<HashSet<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT milestone_key FROM achieved_milestones")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<HashSet<_>, _>>()
            .map_err(DatabaseError::from)?;
        Ok(keys)
    }

    fn record_milestone_achieved(&self, key: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO achieved_milestones (milestone_key) VALUES (?1)",
            params![key],
        )?;
        Ok(())
    }

    fn load_lifestyle_logs(&self, limit: Option<u32>) -> Result<Vec<DailyLifestyleLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT log_date, zinc, folate, sleep_hours, exercise, stress, notes
             FROM fertility_logs
             ORDER BY log_date DESC
             LIMIT ?1",
        )?;
        let limit = limit.map(i64::from).unwrap_or(-1);
        let rows = stmt.query_map(params![limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, bool>(1)?,
                row.get::<_, bool>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, u8>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;

        let mut logs = Vec::new();
        for row in rows {
            let (log_date, zinc_taken, folate_taken, sleep_hours, exercised, stress_level, notes) =
                row.map_err(DatabaseError::from)?;
            logs.push(DailyLifestyleLog {
                log_date: parse_date("fertility_logs", &log_date)?,
                zinc_taken,
                folate_taken,
                sleep_hours,
                exercised,
                stress_level,
                notes,
            });
        }
        Ok(logs)
    }

    fn load_lifestyle_log(&self, log_date: NaiveDate) -> Result<Option<DailyLifestyleLog>> {
        let date_str = log_date.format(DATE_FMT).to_string();
        let row = self
            .conn
            .query_row(
                "SELECT zinc, folate, sleep_hours, exercise, stress, notes
                 FROM fertility_logs WHERE log_date = ?1",
                params![date_str],
                |row| {
                    Ok(DailyLifestyleLog {
                        log_date,
                        zinc_taken: row.get(0)?,
                        folate_taken: row.get(1)?,
                        sleep_hours: row.get(2)?,
                        exercised: row.get(3)?,
                        stress_level: row.get(4)?,
                        notes: row.get(5)?,
                    })
                },
            )
            .optional()
            .map_err(DatabaseError::from)?;
        Ok(row)
    }

    fn upsert_lifestyle_log(&self, log: &DailyLifestyleLog) -> Result<()> {
        self.conn.execute(
            "INSERT INTO fertility_logs (log_date, zinc, folate, sleep_hours, exercise, stress, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(log_date) DO UPDATE SET
                zinc = excluded.zinc,
                folate = excluded.folate,
                sleep_hours = excluded.sleep_hours,
                exercise = excluded.exercise,
                stress = excluded.stress,
                notes = excluded.notes",
            params![
                log.log_date.format(DATE_FMT).to_string(),
                log.zinc_taken,
                log.folate_taken,
                log.sleep_hours,
                log.exercised,
                log.stress_level,
                log.notes,
            ],
        )?;
        Ok(())
    }

    fn load_craving_logs(&self) -> Result<Vec<CravingLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT logged_at, intensity, \"trigger\", resisted, message
             FROM craving_logs
             ORDER BY logged_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u8>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut logs = Vec::new();
        for row in rows {
            let (logged_at, intensity, trigger, resisted, message) =
                row.map_err(DatabaseError::from)?;
            let logged_at = DateTime::parse_from_rfc3339(&logged_at).map_err(|e| {
                DatabaseError::CorruptRow {
                    table: "craving_logs",
                    message: format!("bad timestamp '{logged_at}': {e}"),
                }
            })?;
            logs.push(CravingLog {
                logged_at,
                intensity,
                trigger,
                resisted,
                message,
            });
        }
        Ok(logs)
    }

    fn add_craving_log(&self, log: &CravingLog) -> Result<()> {
        self.conn.execute(
            "INSERT INTO craving_logs (logged_at, intensity, \"trigger\", resisted, message)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                log.logged_at.to_rfc3339(),
                log.intensity,
                log.trigger,
                log.resisted,
                log.message,
            ],
        )?;
        Ok(())
    }

    fn load_quit_attempts(&self) -> Result<AttemptHistory> {
        let mut stmt = self.conn.prepare(
            "SELECT started_on, ended_on, days_lasted FROM quit_attempts ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<i64>>(2)?,
            ))
        })?;

        let mut attempts = Vec::new();
        for row in rows {
            let (started_on, ended_on, days_lasted) = row.map_err(DatabaseError::from)?;
            let started_on = parse_date("quit_attempts", &started_on)?;
            let attempt = match ended_on {
                None => QuitAttempt::Active { started_on },
                Some(ended) => QuitAttempt::Ended {
                    started_on,
                    ended_on: parse_date("quit_attempts", &ended)?,
                    days_lasted: days_lasted.unwrap_or(0),
                },
            };
            attempts.push(attempt);
        }
        Ok(AttemptHistory::from_attempts(attempts))
    }

    fn save_quit_attempts(&self, history: &AttemptHistory) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM quit_attempts", [])?;
        for attempt in history.attempts() {
            match attempt {
                QuitAttempt::Active { started_on } => {
                    tx.execute(
                        "INSERT INTO quit_attempts (started_on, ended_on, days_lasted)
                         VALUES (?1, NULL, NULL)",
                        params![started_on.format(DATE_FMT).to_string()],
                    )?;
                }
                QuitAttempt::Ended {
                    started_on,
                    ended_on,
                    days_lasted,
                } => {
                    tx.execute(
                        "INSERT INTO quit_attempts (started_on, ended_on, days_lasted)
                         VALUES (?1, ?2, ?3)",
                        params![
                            started_on.format(DATE_FMT).to_string(),
                            ended_on.format(DATE_FMT).to_string(),
                            days_lasted,
                        ],
                    )?;
                }
            }
        }
        tx.commit().map_err(DatabaseError::from)?;
        Ok(())
    }

    fn load_diary_entries(&self) -> Result<Vec<DiaryEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT entry_date, mood, message FROM diary_entries ORDER BY entry_date DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (entry_date, mood, message) = row.map_err(DatabaseError::from)?;
            entries.push(DiaryEntry {
                entry_date: parse_date("diary_entries", &entry_date)?,
                mood: Mood::parse_lossy(&mood),
                message,
            });
        }
        Ok(entries)
    }

    fn add_diary_entry(&self, entry: &DiaryEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO diary_entries (entry_date, mood, message) VALUES (?1, ?2, ?3)",
            params![
                entry.entry_date.format(DATE_FMT).to_string(),
                entry.mood.as_str(),
                entry.message,
            ],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings() -> Settings {
        Settings {
            quit_date: date(2024, 1, 1),
            cigarettes_per_day: 20,
            price_per_pack: 600,
            cigarettes_per_pack: 20,
        }
    }

    #[test]
    fn settings_roundtrip_and_overwrite() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_settings().unwrap().is_none());

        db.save_settings(&settings()).unwrap();
        assert_eq!(db.load_settings().unwrap().unwrap(), settings());

        let mut updated = settings();
        updated.price_per_pack = 620;
        db.save_settings(&updated).unwrap();
        // later writes overwrite; there is still exactly one record
        assert_eq!(db.load_settings().unwrap().unwrap().price_per_pack, 620);
    }

    #[test]
    fn invalid_settings_are_not_persisted() {
        let db = Database::open_memory().unwrap();
        let mut bad = settings();
        bad.cigarettes_per_pack = 0;
        assert!(db.save_settings(&bad).is_err());
        assert!(db.load_settings().unwrap().is_none());
    }

    #[test]
    fn milestone_recording_is_idempotent() {
        let db = Database::open_memory().unwrap();
        db.record_milestone_achieved("day_1").unwrap();
        db.record_milestone_achieved("day_1").unwrap();
        db.record_milestone_achieved("day_3").unwrap();

        let keys = db.load_achieved_milestone_keys().unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("day_1"));
        assert!(keys.contains("day_3"));
    }

    #[test]
    fn lifestyle_log_upserts_per_day() {
        let db = Database::open_memory().unwrap();
        let mut log = DailyLifestyleLog {
            log_date: date(2024, 2, 1),
            zinc_taken: true,
            folate_taken: false,
            sleep_hours: 7.5,
            exercised: false,
            stress_level: 3,
            notes: "first pass".into(),
        };
        db.upsert_lifestyle_log(&log).unwrap();

        log.folate_taken = true;
        log.notes = "second pass".into();
        db.upsert_lifestyle_log(&log).unwrap();

        let logs = db.load_lifestyle_logs(None).unwrap();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].folate_taken);
        assert_eq!(logs[0].notes, "second pass");

        let today = db.load_lifestyle_log(date(2024, 2, 1)).unwrap().unwrap();
        assert_eq!(today, log);
        assert!(db.load_lifestyle_log(date(2024, 2, 2)).unwrap().is_none());
    }

    #[test]
    fn lifestyle_logs_come_back_newest_first_with_limit() {
        let db = Database::open_memory().unwrap();
        for day in 1..=5 {
            db.upsert_lifestyle_log(&DailyLifestyleLog {
                log_date: date(2024, 2, day),
                zinc_taken: true,
                folate_taken: true,
                sleep_hours: 7.0,
                exercised: true,
                stress_level: 2,
                notes: String::new(),
            })
            .unwrap();
        }

        let logs = db.load_lifestyle_logs(Some(3)).unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].log_date, date(2024, 2, 5));
        assert_eq!(logs[2].log_date, date(2024, 2, 3));
    }

    #[test]
    fn craving_logs_append_newest_first() {
        use chrono::Timelike;

        let db = Database::open_memory().unwrap();
        let jst = crate::time::jst();
        for (hour, resisted) in [(9, true), (13, false), (21, true)] {
            db.add_craving_log(&CravingLog {
                logged_at: jst.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
                intensity: 3,
                trigger: "after a meal".into(),
                resisted,
                message: String::new(),
            })
            .unwrap();
        }

        let logs = db.load_craving_logs().unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].logged_at.hour(), 21);
        assert_eq!(logs[2].logged_at.hour(), 9);
    }

    #[test]
    fn attempt_history_roundtrips() {
        let db = Database::open_memory().unwrap();
        let mut history = AttemptHistory::default();
        history.start(date(2024, 1, 1));
        history.relapse(date(2024, 1, 11));
        db.save_quit_attempts(&history).unwrap();

        let loaded = db.load_quit_attempts().unwrap();
        assert_eq!(loaded, history);
        assert_eq!(loaded.current().unwrap().started_on(), date(2024, 1, 11));
    }

    #[test]
    fn empty_attempt_history() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_quit_attempts().unwrap().is_empty());
    }

    #[test]
    fn diary_entries_append_newest_first() {
        let db = Database::open_memory().unwrap();
        db.add_diary_entry(&DiaryEntry {
            entry_date: date(2024, 4, 1),
            mood: Mood::Tough,
            message: "rough day, still smoke-free".into(),
        })
        .unwrap();
        db.add_diary_entry(&DiaryEntry {
            entry_date: date(2024, 4, 2),
            mood: Mood::Happy,
            message: "two weeks down".into(),
        })
        .unwrap();

        let entries = db.load_diary_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry_date, date(2024, 4, 2));
        assert_eq!(entries[0].mood, Mood::Happy);
    }
}
