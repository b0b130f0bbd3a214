//! Mailer: the active provider plus retry policy.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{
    config::MailConfig,
    errors::NotificationError,
    message::{Delivery, EmailMessage},
    retry::RetryPolicy,
    transport::Transport,
    transports,
};

/// Sends email through the first provider that verified at startup.
///
/// When no provider verified, every send is [`Delivery::Skipped`].
pub struct Mailer {
    active: RwLock<Option<Arc<dyn Transport>>>,
    retry: RetryPolicy,
}

impl Mailer {
    /// Verify `candidates` in order and keep the first that passes.
    pub async fn init(candidates: Vec<Arc<dyn Transport>>, retry: RetryPolicy) -> Self {
        let mut active = None;

        for candidate in candidates {
            match candidate.verify().await {
                Ok(()) => {
                    info!(provider = candidate.name(), "mail provider ready");
                    active = Some(candidate);
                    break;
                }
                Err(error) => {
                    warn!(
                        provider = candidate.name(),
                        error = %error,
                        "mail provider failed verification"
                    );
                }
            }
        }

        if active.is_none() {
            warn!("email not configured; notifications will be skipped");
        }

        Self {
            active: RwLock::new(active),
            retry,
        }
    }

    /// Build and verify the provider chain described by `config`.
    pub async fn from_config(config: &MailConfig) -> Self {
        let chain = transports::build_chain(&config.providers(), &config.mail_from);

        Self::init(chain, config.retry_policy()).await
    }

    /// Use `transport` without verifying it.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, retry: RetryPolicy) -> Self {
        Self {
            active: RwLock::new(Some(transport)),
            retry,
        }
    }

    /// A mailer that skips every send.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            active: RwLock::new(None),
            retry: RetryPolicy::none(),
        }
    }

    pub async fn is_configured(&self) -> bool {
        self.active.read().await.is_some()
    }

    pub async fn active_provider(&self) -> Option<&'static str> {
        self.active.read().await.as_ref().map(|transport| transport.name())
    }

    /// Drop the active provider; later sends are skipped.
    pub async fn teardown(&self) {
        if let Some(transport) = self.active.write().await.take() {
            info!(provider = transport.name(), "mail provider shut down");
        }
    }

    /// Send `message`, retrying transient failures with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::SendFailed`] on a permanent failure or once
    /// the attempts are exhausted.
    pub async fn send(&self, message: &EmailMessage) -> Result<Delivery, NotificationError> {
        let Some(transport) = self.active.read().await.clone() else {
            debug!(subject = %message.subject, "email not configured; skipping send");
            return Ok(Delivery::Skipped);
        };

        let provider = transport.name();
        let mut attempt = 1;

        loop {
            match transport.send(message).await {
                Ok(receipt) => {
                    info!(
                        provider,
                        attempt,
                        message_id = receipt.message_id.as_deref().unwrap_or_default(),
                        "email sent"
                    );

                    return Ok(Delivery::Sent(receipt));
                }
                Err(error) if error.is_transient() && attempt < self.retry.max_attempts() => {
                    let delay = self.retry.backoff_after(attempt);

                    warn!(
                        provider,
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %error,
                        "email send failed; retrying"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(source) => {
                    return Err(NotificationError::SendFailed {
                        provider,
                        attempts: attempt,
                        source,
                    });
                }
            }
        }
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
