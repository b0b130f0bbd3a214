//! Log sink provider for local development.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::notifications::{
    errors::TransportError,
    message::{EmailMessage, SentReceipt},
    transport::Transport,
};

/// Writes each message to the log instead of delivering it.
#[derive(Debug, Clone)]
pub struct LogTransport {
    from: String,
}

impl LogTransport {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Transport for LogTransport {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn verify(&self) -> Result<(), TransportError> {
        Ok(())
    }

    async fn send(&self, message: &EmailMessage) -> Result<SentReceipt, TransportError> {
        let message_id = format!("log-{}", Uuid::now_v7());

        info!(
            message_id,
            from = %self.from,
            to = %message.to,
            subject = %message.subject,
            body = %message.text,
            "email written to log"
        );

        Ok(SentReceipt {
            provider: self.name(),
            message_id: Some(message_id),
        })
    }
}
