//! Outbound email: provider chain, retrying mailer and order notifications.

pub mod config;
pub mod errors;
pub mod mailer;
pub mod message;
pub mod notifier;
pub mod retry;
pub mod templates;
pub mod transport;
pub mod transports;

pub use errors::{NotificationError, TransportError};
pub use mailer::Mailer;
pub use message::{Delivery, EmailMessage, SentReceipt};
pub use notifier::{EmailOrderNotifier, OrderNotifier};
pub use transport::Transport;
