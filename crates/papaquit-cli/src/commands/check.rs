//! Daily fertility lifestyle check.

use clap::Subcommand;
use papaquit_core::score::{daily_score, ScoreBand};
use papaquit_core::storage::Database;
use papaquit_core::time;
use papaquit_core::{DailyLifestyleLog, Repository};

#[derive(Subcommand)]
pub enum CheckAction {
    /// Save today's checklist (overwrites an earlier entry for today)
    Add {
        /// Took a zinc supplement
        #[arg(long)]
        zinc: bool,
        /// Took a folate supplement
        #[arg(long)]
        folate: bool,
        /// Hours slept
        #[arg(long, value_parser = sleep_hours_in_range)]
        sleep_hours: f64,
        /// Exercised at least 20 minutes
        #[arg(long)]
        exercise: bool,
        /// Stress level, 1 (relaxed) to 5 (overwhelmed)
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=5))]
        stress: u8,
        /// Free-form note
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Show today's entry
    Today,
    /// Show recent entries with scores, newest first
    List {
        /// Maximum entries to show
        #[arg(long, default_value = "14")]
        limit: u32,
    },
}

fn sleep_hours_in_range(raw: &str) -> Result<f64, String> {
    let hours: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=24.0).contains(&hours) {
        Ok(hours)
    } else {
        Err("sleep hours must be between 0 and 24".to_string())
    }
}

pub fn run(action: CheckAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        CheckAction::Add {
            zinc,
            folate,
            sleep_hours,
            exercise,
            stress,
            notes,
        } => {
            let log = DailyLifestyleLog {
                log_date: time::now_jst().date_naive(),
                zinc_taken: zinc,
                folate_taken: folate,
                sleep_hours,
                exercised: exercise,
                stress_level: stress,
                notes,
            };
            db.upsert_lifestyle_log(&log)?;

            let score = daily_score(&log);
            match ScoreBand::from_score(score) {
                ScoreBand::Excellent => println!("🌟 Today's fertility score: {score} - excellent!"),
                ScoreBand::Good => println!("👍 Today's fertility score: {score} - good pace!"),
                ScoreBand::NeedsImprovement => {
                    println!("💡 Today's fertility score: {score} - room to improve!")
                }
            }
        }
        CheckAction::Today => {
            match db.load_lifestyle_log(time::now_jst().date_naive())? {
                Some(log) => println!("{}", serde_json::to_string_pretty(&log)?),
                None => println!("no check recorded today"),
            }
        }
        CheckAction::List { limit } => {
            let logs = db.load_lifestyle_logs(Some(limit))?;
            if logs.is_empty() {
                println!("no checks recorded yet");
                return Ok(());
            }
            for log in &logs {
                let score = daily_score(log);
                println!(
                    "{}  score {:>3} ({})",
                    log.log_date,
                    score,
                    ScoreBand::from_score(score).label()
                );
            }
        }
    }
    Ok(())
}
