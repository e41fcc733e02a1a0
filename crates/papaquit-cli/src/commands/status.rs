//! Dashboard command: streak, savings, milestone transitions, today's check.

use papaquit_core::milestones;
use papaquit_core::savings::format_yen;
use papaquit_core::score::{daily_score, ScoreBand};
use papaquit_core::storage::Database;
use papaquit_core::time;
use papaquit_core::{Config, DiscordNotifier, ProgressSnapshot, Repository};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let Some(settings) = db.load_settings()? else {
        eprintln!("No settings yet. Run `papaquit settings set` first.");
        std::process::exit(1);
    };

    let now = time::now_jst();
    let snapshot = ProgressSnapshot::compute(&settings, now)?;

    // Record newly crossed milestones and fire notifications on every
    // dashboard read, JSON consumers included.
    let mut config = Config::load_or_default();
    let notifier = DiscordNotifier::from_config(&config.notifications);
    let recorded = db.load_achieved_milestone_keys()?;
    let newly = milestones::newly_achieved(snapshot.elapsed_days, &recorded);
    for milestone in &newly {
        db.record_milestone_achieved(milestone.key)?;
        notifier.send_milestone(milestone);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("👶 PapaQuit - smoke-free for the baby");
    println!();
    println!("⏱️  Smoke-free:        {}", snapshot.elapsed);
    println!("💰 Baby fund:         {}", format_yen(snapshot.money_saved));
    println!("🚭 Cigarettes avoided: {}", snapshot.cigarettes_avoided);

    for milestone in &newly {
        println!();
        println!("🎉 {} {}", milestone.icon, milestone.title);
        println!("   {}", milestone.description);
    }

    println!();
    match snapshot.next_milestone {
        Some(next) => {
            let remaining = snapshot.remaining_days_to_next.unwrap_or_default();
            println!("{} Next: {} - {} days to go", next.icon, next.title, remaining);
        }
        None => println!("🥇 All milestones achieved. Congratulations!"),
    }

    println!();
    match db.load_lifestyle_log(now.date_naive())? {
        Some(log) => {
            let score = daily_score(&log);
            let band = ScoreBand::from_score(score);
            println!(
                "📋 Today's check: zinc {} / folate {} / exercise {} / sleep {}h",
                mark(log.zinc_taken),
                mark(log.folate_taken),
                mark(log.exercised),
                log.sleep_hours,
            );
            println!("   Score: {score} ({})", band.label());
        }
        None => {
            println!("📋 Today's fertility check is still empty. Run `papaquit check add`.");
            maybe_send_reminder(&mut config, &notifier, &snapshot, now.date_naive())?;
        }
    }

    println!();
    println!("Quit date: {}", settings.quit_date);
    Ok(())
}

fn mark(done: bool) -> &'static str {
    if done {
        "✅"
    } else {
        "⬜"
    }
}

/// At most one reminder per calendar day, tracked in the config file.
fn maybe_send_reminder(
    config: &mut Config,
    notifier: &DiscordNotifier,
    snapshot: &ProgressSnapshot,
    today: chrono::NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    if !config.notifications.daily_reminder || !notifier.is_configured() {
        return Ok(());
    }
    if config.notifications.last_reminder_on == Some(today) {
        return Ok(());
    }
    if notifier.send_daily_reminder(snapshot.elapsed_days, snapshot.money_saved) {
        config.notifications.last_reminder_on = Some(today);
        config.save()?;
    }
    Ok(())
}
