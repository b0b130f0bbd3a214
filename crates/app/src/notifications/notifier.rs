//! Order notifications.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, error, info};

use crate::domain::orders::records::OrderRecord;

use super::{
    errors::NotificationError,
    mailer::Mailer,
    message::{Delivery, EmailMessage},
    templates::{self, Storefront},
};

/// Reacts to committed orders. Implementations never fail the order.
#[automock]
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn order_placed(&self, order: &OrderRecord);
}

/// Emails the operator and, when an address was given, the customer.
#[derive(Debug, Clone)]
pub struct EmailOrderNotifier {
    mailer: Arc<Mailer>,
    admin_address: Option<String>,
    store: Storefront,
}

impl EmailOrderNotifier {
    #[must_use]
    pub fn new(mailer: Arc<Mailer>, admin_address: Option<String>, store: Storefront) -> Self {
        Self {
            mailer,
            admin_address,
            store,
        }
    }

    /// Send the delivery check message to the operator address.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::NoRecipient`] without an operator address,
    /// otherwise as [`Self::send_test_email_to`].
    pub async fn send_test_email(&self) -> Result<Delivery, NotificationError> {
        let Some(to) = self.admin_address.as_deref() else {
            return Err(NotificationError::NoRecipient);
        };

        self.send_test_email_to(to).await
    }

    /// Send the delivery check message to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::NoProvider`] when email is not configured, or
    /// the send error.
    pub async fn send_test_email_to(&self, to: &str) -> Result<Delivery, NotificationError> {
        if !self.mailer.is_configured().await {
            return Err(NotificationError::NoProvider);
        }

        self.mailer
            .send(&templates::test_message(to, &self.store))
            .await
    }

    async fn deliver(&self, kind: &'static str, message: EmailMessage) {
        match self.mailer.send(&message).await {
            Ok(Delivery::Sent(receipt)) => info!(
                kind,
                to = %message.to,
                provider = receipt.provider,
                message_id = receipt.message_id.as_deref().unwrap_or_default(),
                "order email sent"
            ),
            Ok(Delivery::Skipped) => debug!(kind, "email not configured; order email skipped"),
            Err(err) => error!(kind, to = %message.to, error = %err, "failed to send order email"),
        }
    }
}

#[async_trait]
impl OrderNotifier for EmailOrderNotifier {
    async fn order_placed(&self, order: &OrderRecord) {
        if let Some(admin) = self.admin_address.as_deref() {
            self.deliver(
                "admin",
                templates::admin_notification(order, admin, &self.store),
            )
            .await;
        } else {
            debug!(reference = %order.reference, "no operator address; admin email skipped");
        }

        if let Some(customer) = order.customer_email.as_deref() {
            self.deliver(
                "customer",
                templates::customer_confirmation(order, customer, &self.store),
            )
            .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::orders::{
            records::{OrderId, PENDING_STATUS},
            reference::OrderReference,
        },
        notifications::{
            errors::TransportError, message::SentReceipt, retry::RetryPolicy,
            transport::MockTransport,
        },
    };

    use super::*;

    fn store() -> Storefront {
        Storefront {
            name: "Storefront".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }

    fn order(customer_email: Option<&str>) -> OrderRecord {
        OrderRecord {
            id: OrderId::from_i64(1),
            reference: OrderReference::from_string("ORD-ABCDEFGHJK".to_string()),
            customer_name: "Asha".to_string(),
            customer_email: customer_email.map(ToString::to_string),
            customer_phone: None,
            address: "12 MG Road".to_string(),
            items: Vec::new(),
            total: Decimal::ZERO,
            status: PENDING_STATUS.to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn notifier(transport: MockTransport, admin: Option<&str>) -> EmailOrderNotifier {
        EmailOrderNotifier::new(
            Arc::new(Mailer::with_transport(
                Arc::new(transport),
                RetryPolicy::none(),
            )),
            admin.map(ToString::to_string),
            store(),
        )
    }

    fn accepting_transport(expected_recipients: &'static [&'static str]) -> MockTransport {
        let mut transport = MockTransport::new();
        transport.expect_name().return_const("mock");

        for recipient in expected_recipients {
            transport
                .expect_send()
                .withf(move |message| message.to == *recipient)
                .once()
                .returning(|_| {
                    Ok(SentReceipt {
                        provider: "mock",
                        message_id: None,
                    })
                });
        }

        transport
    }

    #[tokio::test]
    async fn sends_admin_and_customer_emails() {
        let notifier = notifier(
            accepting_transport(&["ops@example.com", "asha@example.com"]),
            Some("ops@example.com"),
        );

        notifier.order_placed(&order(Some("asha@example.com"))).await;
    }

    #[tokio::test]
    async fn customer_email_is_skipped_without_address() {
        let notifier = notifier(
            accepting_transport(&["ops@example.com"]),
            Some("ops@example.com"),
        );

        notifier.order_placed(&order(None)).await;
    }

    #[tokio::test]
    async fn admin_email_is_skipped_without_operator_address() {
        let notifier = notifier(accepting_transport(&["asha@example.com"]), None);

        notifier.order_placed(&order(Some("asha@example.com"))).await;
    }

    #[tokio::test]
    async fn admin_failure_does_not_stop_customer_email() {
        let mut transport = MockTransport::new();
        transport.expect_name().return_const("mock");
        transport
            .expect_send()
            .withf(|message| message.to == "ops@example.com")
            .once()
            .returning(|_| Err(TransportError::Rejected("mailbox full".to_string())));
        transport
            .expect_send()
            .withf(|message| message.to == "asha@example.com")
            .once()
            .returning(|_| {
                Ok(SentReceipt {
                    provider: "mock",
                    message_id: None,
                })
            });

        let notifier = notifier(transport, Some("ops@example.com"));

        notifier.order_placed(&order(Some("asha@example.com"))).await;
    }

    #[tokio::test]
    async fn test_email_requires_operator_address() {
        let notifier = notifier(accepting_transport(&[]), None);

        let result = notifier.send_test_email().await;

        assert!(matches!(result, Err(NotificationError::NoRecipient)));
    }

    #[tokio::test]
    async fn test_email_requires_configured_mailer() {
        let notifier = EmailOrderNotifier::new(
            Arc::new(Mailer::disabled()),
            Some("ops@example.com".to_string()),
            store(),
        );

        let result = notifier.send_test_email().await;

        assert!(matches!(result, Err(NotificationError::NoProvider)));
    }

    #[tokio::test]
    async fn test_email_goes_to_operator() -> TestResult {
        let notifier = notifier(
            accepting_transport(&["ops@example.com"]),
            Some("ops@example.com"),
        );

        let delivery = notifier.send_test_email().await?;

        assert!(matches!(delivery, Delivery::Sent(_)));

        Ok(())
    }
}
