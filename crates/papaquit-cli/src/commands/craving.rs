//! Craving log commands: record an urge and review the history.

use clap::Subcommand;
use papaquit_core::storage::Database;
use papaquit_core::time;
use papaquit_core::{CravingLog, CravingStats, Repository};

#[derive(Subcommand)]
pub enum CravingAction {
    /// Record an urge to smoke
    Add {
        /// Urge strength, 1 (mild) to 5 (barely bearable)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        intensity: u8,
        /// What set it off (after a meal, stress, alcohol, ...)
        #[arg(long)]
        trigger: String,
        /// Pass when you gave in; omit when you resisted
        #[arg(long)]
        smoked: bool,
        /// A word for the future child, to take your mind off it
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Show the craving history, newest first
    List {
        /// Maximum entries to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

pub fn run(action: CravingAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        CravingAction::Add {
            intensity,
            trigger,
            smoked,
            message,
        } => {
            db.add_craving_log(&CravingLog {
                logged_at: time::now_jst(),
                intensity,
                trigger,
                resisted: !smoked,
                message,
            })?;
            if smoked {
                println!("Logged. You'll beat the next one.");
            } else {
                println!("💪 Well resisted! Logged.");
            }
        }
        CravingAction::List { limit } => {
            let logs = db.load_craving_logs()?;
            if logs.is_empty() {
                println!("no cravings logged yet");
                return Ok(());
            }

            let stats = CravingStats::from_logs(&logs);
            println!(
                "{} logged / {} resisted / {}% success",
                stats.total, stats.resisted, stats.success_rate
            );
            println!();

            for log in logs.iter().take(limit) {
                let result = if log.resisted { "💪" } else { "😔" };
                let stars: String = "⭐".repeat(usize::from(log.intensity));
                println!(
                    "{} {result} {stars}  trigger: {}",
                    log.logged_at.format("%Y-%m-%d %H:%M"),
                    log.trigger
                );
                if !log.message.is_empty() {
                    println!("   💌 {}", log.message);
                }
            }
        }
    }
    Ok(())
}
