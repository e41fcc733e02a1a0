//! Cumulative savings series as JSON, for charting.

use papaquit_core::savings::daily_series;
use papaquit_core::storage::Database;
use papaquit_core::time;
use papaquit_core::{Repository, SavingsPoint};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let Some(settings) = db.load_settings()? else {
        eprintln!("No settings yet. Run `papaquit settings set` first.");
        std::process::exit(1);
    };
    settings.validate()?;

    let today = time::now_jst().date_naive();
    let points: Vec<SavingsPoint> = daily_series(&settings, today).collect();
    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}
