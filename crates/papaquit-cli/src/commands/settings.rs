//! Quit date and cigarette settings.

use chrono::NaiveDate;
use clap::Subcommand;
use papaquit_core::savings;
use papaquit_core::storage::Database;
use papaquit_core::{Repository, Settings};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show the current settings
    Show,
    /// Save settings (overwrites the previous record)
    Set {
        /// The day you quit, YYYY-MM-DD
        #[arg(long)]
        quit_date: NaiveDate,
        /// Cigarettes you smoked per day
        #[arg(long)]
        cigarettes_per_day: u32,
        /// Price of one pack in yen
        #[arg(long)]
        price_per_pack: u32,
        /// Cigarettes per pack (default: 20)
        #[arg(long, default_value = "20")]
        cigarettes_per_pack: u32,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        SettingsAction::Show => match db.load_settings()? {
            Some(settings) => {
                println!("{}", serde_json::to_string_pretty(&settings)?);
                println!(
                    "per-cigarette price: ¥{:.1}",
                    savings::unit_price(&settings)
                );
            }
            None => println!("no settings saved yet"),
        },
        SettingsAction::Set {
            quit_date,
            cigarettes_per_day,
            price_per_pack,
            cigarettes_per_pack,
        } => {
            let settings = Settings {
                quit_date,
                cigarettes_per_day,
                price_per_pack,
                cigarettes_per_pack,
            };
            db.save_settings(&settings)?;

            // First configuration also opens the first quit attempt.
            let mut history = db.load_quit_attempts()?;
            if history.is_empty() {
                history.start(quit_date);
                db.save_quit_attempts(&history)?;
            }
            println!("settings saved");
        }
    }
    Ok(())
}
