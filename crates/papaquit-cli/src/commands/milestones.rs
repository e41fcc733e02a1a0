//! Milestone catalog listing with achievement marks.

use papaquit_core::storage::Database;
use papaquit_core::time;
use papaquit_core::{ProgressSnapshot, Repository, MILESTONES};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let elapsed_days = match db.load_settings()? {
        Some(settings) => ProgressSnapshot::compute(&settings, time::now_jst())?.elapsed_days,
        None => 0,
    };

    for milestone in &MILESTONES {
        let mark = if milestone.threshold_days <= elapsed_days {
            "✅"
        } else {
            "  "
        };
        println!(
            "{mark} {} day {:>3}  {}",
            milestone.icon, milestone.threshold_days, milestone.title
        );
        println!("      {}", milestone.description);
    }
    Ok(())
}
