//! Notification errors.

use thiserror::Error;

/// Failure reported by a single provider.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout or server-side failure; worth retrying.
    #[error("mail provider unavailable: {0}")]
    Unavailable(String),

    /// The provider refused the message or the credentials.
    #[error("mail provider rejected the message: {0}")]
    Rejected(String),

    /// The message could not be built, e.g. an unparsable address.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}

impl TransportError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("sending via {provider} failed after {attempts} attempt(s)")]
    SendFailed {
        provider: &'static str,
        attempts: u32,
        #[source]
        source: TransportError,
    },

    #[error("email not configured")]
    NoProvider,

    #[error("no operator address configured")]
    NoRecipient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unavailable_is_transient() {
        assert!(TransportError::Unavailable("timeout".to_string()).is_transient());
        assert!(!TransportError::Rejected("550".to_string()).is_transient());
        assert!(!TransportError::InvalidMessage("to".to_string()).is_transient());
    }
}
