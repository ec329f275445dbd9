use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use super::mailer::{EmailMessage, Mailer, NotificationError, ResendMailer};
use crate::config::EmailConfig;

/// What happened to a notification attempt. Callers are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Sent { id: Option<String> },
    Skipped,
    Failed,
    TimedOut,
}

/// Sends lead notifications to the single configured recipient. Exactly one
/// attempt per call, bounded by `timeout`; failures never reach the caller.
#[derive(Clone)]
pub struct NotificationDispatcher {
    mailer: Option<Arc<dyn Mailer>>,
    sender: String,
    recipient: Option<String>,
    timeout: Duration,
}

impl NotificationDispatcher {
    pub fn new(
        mailer: Arc<dyn Mailer>,
        sender: impl Into<String>,
        recipient: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            mailer: Some(mailer),
            sender: sender.into(),
            recipient: recipient.filter(|r| !r.trim().is_empty()),
            timeout,
        }
    }

    pub fn disabled() -> Self {
        Self {
            mailer: None,
            sender: String::new(),
            recipient: None,
            timeout: Duration::from_secs(0),
        }
    }

    /// Missing credential or recipient yields a disabled dispatcher, which is
    /// a valid way to run the service.
    pub fn from_config(config: &EmailConfig) -> Result<Self, NotificationError> {
        if !config.is_configured() {
            info!("Email notifications disabled: API key or recipient not configured");
            return Ok(Self::disabled());
        }

        let timeout = config.timeout();
        let mailer = ResendMailer::new(&config.api_base_url, &config.api_key, timeout)?;

        Ok(Self::new(
            Arc::new(mailer),
            config.sender.clone(),
            Some(config.recipient.clone()),
            timeout,
        ))
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some() && self.recipient.is_some()
    }

    pub async fn notify(&self, subject: &str, html: &str) -> NotificationOutcome {
        let (Some(mailer), Some(recipient)) = (&self.mailer, &self.recipient) else {
            info!(subject, "Email not configured - skipping notification");
            return NotificationOutcome::Skipped;
        };

        let message = EmailMessage {
            from: self.sender.clone(),
            to: vec![recipient.clone()],
            subject: subject.to_string(),
            html: html.to_string(),
        };

        match tokio::time::timeout(self.timeout, mailer.send(&message)).await {
            Ok(Ok(sent)) => {
                info!(id = ?sent.id, subject, "Notification email sent");
                NotificationOutcome::Sent { id: sent.id }
            }
            Ok(Err(e)) => {
                error!(error = %e, subject, "Failed to send notification email");
                NotificationOutcome::Failed
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    subject,
                    "Notification email timed out"
                );
                NotificationOutcome::TimedOut
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::mailer::SentEmail;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<EmailMessage>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, message: &EmailMessage) -> Result<SentEmail, NotificationError> {
            self.sent.lock().push(message.clone());
            Ok(SentEmail {
                id: Some("msg-1".to_string()),
            })
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _message: &EmailMessage) -> Result<SentEmail, NotificationError> {
            Err(NotificationError::Provider {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    struct SlowMailer;

    #[async_trait]
    impl Mailer for SlowMailer {
        async fn send(&self, _message: &EmailMessage) -> Result<SentEmail, NotificationError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(SentEmail::default())
        }
    }

    #[tokio::test]
    async fn test_sends_to_single_recipient_from_sender() {
        let mailer = Arc::new(RecordingMailer::default());
        let dispatcher = NotificationDispatcher::new(
            mailer.clone(),
            "onboarding@resend.dev",
            Some("owner@example.com".to_string()),
            Duration::from_secs(1),
        );

        let outcome = dispatcher.notify("New Booking from Jo", "<p>hi</p>").await;
        assert_eq!(outcome, NotificationOutcome::Sent { id: Some("msg-1".to_string()) });

        let sent = mailer.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "onboarding@resend.dev");
        assert_eq!(sent[0].to, vec!["owner@example.com".to_string()]);
        assert_eq!(sent[0].subject, "New Booking from Jo");
    }

    #[tokio::test]
    async fn test_missing_recipient_skips_without_calling_mailer() {
        let mailer = Arc::new(RecordingMailer::default());
        let dispatcher = NotificationDispatcher::new(
            mailer.clone(),
            "onboarding@resend.dev",
            Some("  ".to_string()),
            Duration::from_secs(1),
        );

        assert!(!dispatcher.is_enabled());
        assert_eq!(dispatcher.notify("s", "h").await, NotificationOutcome::Skipped);
        assert!(mailer.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn test_disabled_dispatcher_skips() {
        let dispatcher = NotificationDispatcher::disabled();
        assert_eq!(dispatcher.notify("s", "h").await, NotificationOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_provider_failure_is_swallowed() {
        let dispatcher = NotificationDispatcher::new(
            Arc::new(FailingMailer),
            "onboarding@resend.dev",
            Some("owner@example.com".to_string()),
            Duration::from_secs(1),
        );

        assert_eq!(dispatcher.notify("s", "h").await, NotificationOutcome::Failed);
    }

    #[tokio::test]
    async fn test_slow_provider_is_bounded_by_timeout() {
        let dispatcher = NotificationDispatcher::new(
            Arc::new(SlowMailer),
            "onboarding@resend.dev",
            Some("owner@example.com".to_string()),
            Duration::from_millis(50),
        );

        let started = std::time::Instant::now();
        assert_eq!(dispatcher.notify("s", "h").await, NotificationOutcome::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_from_config_without_credentials_is_disabled() {
        let config = EmailConfig::default();
        let dispatcher = NotificationDispatcher::from_config(&config).unwrap();
        assert!(!dispatcher.is_enabled());

        let config = EmailConfig {
            api_key: "re_key".to_string(),
            recipient: "owner@example.com".to_string(),
            ..EmailConfig::default()
        };
        let dispatcher = NotificationDispatcher::from_config(&config).unwrap();
        assert!(dispatcher.is_enabled());

        let config = EmailConfig {
            api_key: "re_key".to_string(),
            recipient: "   ".to_string(),
            ..EmailConfig::default()
        };
        assert!(!config.is_configured());
        let dispatcher = NotificationDispatcher::from_config(&config).unwrap();
        assert!(!dispatcher.is_enabled());
    }
}
