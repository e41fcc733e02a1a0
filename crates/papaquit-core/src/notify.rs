//! Discord webhook notifications.
//!
//! Delivery is best-effort: every send returns `bool` and a missing or
//! failing webhook is a silent no-op, never an error the caller has to
//! handle. Milestone detection stays in the progress engine; this module
//! only carries the copy to the webhook.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;
use url::Url;

use crate::error::{CoreError, Result};
use crate::milestones::Milestone;
use crate::savings::format_yen;
use crate::storage::NotificationsConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const WEBHOOK_PREFIX: &str = "https://discord.com/api/webhooks/";

/// Check that a user-supplied webhook URL is a Discord webhook.
///
/// # Errors
/// Returns a `Notify` error describing what is wrong with the URL.
pub fn validate_webhook_url(raw: &str) -> Result<()> {
    Url::parse(raw).map_err(|e| CoreError::Notify(format!("invalid webhook URL: {e}")))?;
    if !raw.starts_with(WEBHOOK_PREFIX) {
        return Err(CoreError::Notify(format!(
            "webhook URL must start with {WEBHOOK_PREFIX}"
        )));
    }
    Ok(())
}

/// Posts progress messages to a Discord webhook.
pub struct DiscordNotifier {
    webhook_url: Option<String>,
}

impl DiscordNotifier {
    /// Build a notifier from the notification config. Disabled
    /// notifications behave exactly like a missing webhook.
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let webhook_url = if config.enabled {
            config.discord_webhook_url.clone()
        } else {
            None
        };
        Self { webhook_url }
    }

    #[cfg(test)]
    fn with_url(url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(url.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Post `content` to the webhook. Returns `true` on success, `false`
    /// when unconfigured or on any delivery failure.
    fn post_message(&self, content: &str) -> bool {
        let Some(url) = &self.webhook_url else {
            return false;
        };
        let Ok(client) = Client::builder().timeout(REQUEST_TIMEOUT).build() else {
            return false;
        };
        let body = json!({ "content": content });
        match client.post(url).json(&body).send() {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Announce a newly crossed milestone.
    pub fn send_milestone(&self, milestone: &Milestone) -> bool {
        self.post_message(&format!(
            "🎉 **Milestone reached!**\n**{}**\n{}",
            milestone.title, milestone.description
        ))
    }

    /// Remind the user that today's lifestyle check is still missing.
    pub fn send_daily_reminder(&self, smoke_free_days: i64, money_saved: i64) -> bool {
        self.post_message(&format!(
            "👶 **Daily check reminder**\nYou haven't filled in today's fertility check!\nDay **{}** smoke-free, **{}** saved so far.\nKeep the streak going 💪",
            smoke_free_days,
            format_yen(money_saved)
        ))
    }

    /// Confirm the webhook is wired up.
    pub fn send_test_message(&self) -> bool {
        self.post_message(
            "✅ **PapaQuit** - Discord notification test\nNotifications are set up correctly!",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestones;

    #[test]
    fn unconfigured_notifier_is_a_silent_noop() {
        let notifier = DiscordNotifier::from_config(&NotificationsConfig::default());
        assert!(!notifier.is_configured());
        assert!(!notifier.send_test_message());
    }

    #[test]
    fn disabled_notifications_ignore_the_webhook() {
        let config = NotificationsConfig {
            enabled: false,
            discord_webhook_url: Some("https://discord.com/api/webhooks/1/abc".into()),
            ..Default::default()
        };
        let notifier = DiscordNotifier::from_config(&config);
        assert!(!notifier.is_configured());
    }

    #[test]
    fn webhook_url_validation() {
        assert!(validate_webhook_url("https://discord.com/api/webhooks/123/token").is_ok());
        assert!(validate_webhook_url("https://example.com/hook").is_err());
        assert!(validate_webhook_url("not a url").is_err());
    }

    #[test]
    fn milestone_message_is_delivered() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/hook")
            .match_header("content-type", "application/json")
            .with_status(204)
            .create();

        let notifier = DiscordNotifier::with_url(format!("{}/hook", server.url()));
        let milestone = milestones::by_key("day_7").unwrap();
        assert!(notifier.send_milestone(milestone));
        mock.assert();
    }

    #[test]
    fn server_error_reports_failure_silently() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/hook").with_status(500).create();

        let notifier = DiscordNotifier::with_url(format!("{}/hook", server.url()));
        assert!(!notifier.send_daily_reminder(10, 6000));
    }
}
