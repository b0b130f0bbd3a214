//! Provider seam.

use async_trait::async_trait;
use mockall::automock;

use super::{
    errors::TransportError,
    message::{EmailMessage, SentReceipt},
};

#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short provider name used in logs and receipts.
    fn name(&self) -> &'static str;

    /// Check that the provider is reachable and accepts our credentials.
    async fn verify(&self) -> Result<(), TransportError>;

    async fn send(&self, message: &EmailMessage) -> Result<SentReceipt, TransportError>;
}
