//! Diary commands: messages for the future child.

use clap::Subcommand;
use papaquit_core::storage::Database;
use papaquit_core::time;
use papaquit_core::{DiaryEntry, Mood, Repository};

#[derive(Subcommand)]
pub enum DiaryAction {
    /// Write a new entry
    Add {
        /// Today's mood
        #[arg(long, value_parser = parse_mood)]
        mood: Mood,
        /// The message itself
        #[arg(long)]
        message: String,
    },
    /// Show all entries, newest first
    List,
}

fn parse_mood(raw: &str) -> Result<Mood, String> {
    match raw {
        "happy" => Ok(Mood::Happy),
        "neutral" => Ok(Mood::Neutral),
        "tough" => Ok(Mood::Tough),
        other => Err(format!(
            "unknown mood '{other}' (expected happy, neutral, or tough)"
        )),
    }
}

pub fn run(action: DiaryAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        DiaryAction::Add { mood, message } => {
            let message = message.trim();
            if message.is_empty() {
                eprintln!("the message is empty");
                std::process::exit(1);
            }
            db.add_diary_entry(&DiaryEntry {
                entry_date: time::now_jst().date_naive(),
                mood,
                message: message.to_string(),
            })?;
            println!("💌 saved");
        }
        DiaryAction::List => {
            let entries = db.load_diary_entries()?;
            if entries.is_empty() {
                println!("no entries yet - write the first one with `papaquit diary add`");
                return Ok(());
            }
            for entry in &entries {
                println!("{} {}", entry.entry_date, entry.mood.icon());
                println!("> {}", entry.message);
                println!();
            }
        }
    }
    Ok(())
}
