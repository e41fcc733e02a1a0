//! Quit attempt history and relapse handling.

use clap::Subcommand;
use papaquit_core::storage::Database;
use papaquit_core::time;
use papaquit_core::{QuitAttempt, Repository};

#[derive(Subcommand)]
pub enum AttemptAction {
    /// Show all attempts, oldest first
    List,
    /// Record a relapse: close the current attempt and restart today
    Relapse,
}

pub fn run(action: AttemptAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        AttemptAction::List => {
            let history = db.load_quit_attempts()?;
            if history.is_empty() {
                println!("no attempts recorded yet");
                return Ok(());
            }
            for attempt in history.attempts() {
                match attempt {
                    QuitAttempt::Active { started_on } => {
                        println!("{started_on} - ongoing 💪");
                    }
                    QuitAttempt::Ended {
                        started_on,
                        ended_on,
                        days_lasted,
                    } => {
                        println!("{started_on} - {ended_on} ({days_lasted} days)");
                    }
                }
            }
        }
        AttemptAction::Relapse => {
            let today = time::now_jst().date_naive();
            let mut history = db.load_quit_attempts()?;
            let previous = history.current();
            history.relapse(today);
            db.save_quit_attempts(&history)?;

            // The dashboard counts from the settings quit date, so a
            // relapse restarts it at today.
            if let Some(mut settings) = db.load_settings()? {
                settings.quit_date = today;
                db.save_settings(&settings)?;
            }

            match previous {
                Some(attempt) => {
                    let lasted = (today - attempt.started_on()).num_days().max(0);
                    println!("Previous attempt lasted {lasted} days. A new one starts today.");
                }
                None => println!("A new attempt starts today."),
            }
            println!("Day zero again - you've done it before, you'll do it again.");
        }
    }
    Ok(())
}
