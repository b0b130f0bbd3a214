//! Email messages and delivery outcomes.

/// A single outbound email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

impl EmailMessage {
    pub fn plain(to: impl Into<String>, subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            html: None,
        }
    }

    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// What a provider reported after accepting a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReceipt {
    pub provider: &'static str,
    pub message_id: Option<String>,
}

/// Result of asking the mailer to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Sent(SentReceipt),

    /// No provider is active; nothing was attempted.
    Skipped,
}

impl Delivery {
    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::Sent(receipt) => receipt.message_id.as_deref(),
            Self::Skipped => None,
        }
    }
}
