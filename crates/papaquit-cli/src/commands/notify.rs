//! Discord notification settings.

use clap::Subcommand;
use papaquit_core::notify::validate_webhook_url;
use papaquit_core::{Config, DiscordNotifier};

#[derive(Subcommand)]
pub enum NotifyAction {
    /// Store the Discord webhook URL
    SetWebhook {
        /// Webhook URL from your Discord server settings
        url: String,
    },
    /// Turn notifications on
    Enable,
    /// Turn notifications off
    Disable,
    /// Send a test message to the configured webhook
    Test,
}

pub fn run(action: NotifyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;

    match action {
        NotifyAction::SetWebhook { url } => {
            validate_webhook_url(&url)?;
            config.notifications.discord_webhook_url = Some(url);
            config.save()?;
            println!("webhook saved");
        }
        NotifyAction::Enable => {
            config.notifications.enabled = true;
            config.save()?;
            println!("notifications enabled");
        }
        NotifyAction::Disable => {
            config.notifications.enabled = false;
            config.save()?;
            println!("notifications disabled");
        }
        NotifyAction::Test => {
            let notifier = DiscordNotifier::from_config(&config.notifications);
            if !notifier.is_configured() {
                eprintln!("no webhook configured (or notifications disabled)");
                std::process::exit(1);
            }
            if notifier.send_test_message() {
                println!("test message delivered");
            } else {
                eprintln!("delivery failed - check the webhook URL");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
