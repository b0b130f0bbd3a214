//! SMTP provider (STARTTLS relay).

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};

use crate::notifications::{
    config::SmtpSettings,
    errors::TransportError,
    message::{EmailMessage, SentReceipt},
    transport::Transport,
};

use super::TRANSPORT_TIMEOUT;

pub struct SmtpTransport {
    client: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpTransport {
    /// Build a client for `settings`; no connection is made until [`Transport::verify`]
    /// or [`Transport::send`].
    ///
    /// # Errors
    ///
    /// Returns an error when `from` is not a valid mailbox or the relay cannot be
    /// configured.
    pub fn new(settings: &SmtpSettings, from: &str) -> Result<Self, TransportError> {
        let from = parse_mailbox(from)?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|error| TransportError::Unavailable(error.to_string()))?
            .port(settings.port)
            .timeout(Some(TRANSPORT_TIMEOUT));

        if let Some((username, password)) = &settings.credentials {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            client: builder.build(),
            from,
        })
    }

    fn build_message(&self, message: &EmailMessage) -> Result<Message, TransportError> {
        let builder = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&message.to)?)
            .subject(message.subject.clone());

        let built = match &message.html {
            Some(html) => builder.multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                html.clone(),
            )),
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(message.text.clone()),
        };

        built.map_err(|error| TransportError::InvalidMessage(error.to_string()))
    }
}

#[async_trait]
impl Transport for SmtpTransport {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn verify(&self) -> Result<(), TransportError> {
        match self.client.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(TransportError::Unavailable(
                "SMTP server did not accept the connection".to_string(),
            )),
            Err(error) => Err(classify(&error)),
        }
    }

    async fn send(&self, message: &EmailMessage) -> Result<SentReceipt, TransportError> {
        let email = self.build_message(message)?;

        let response = self
            .client
            .send(email)
            .await
            .map_err(|error| classify(&error))?;

        Ok(SentReceipt {
            provider: self.name(),
            message_id: response.message().next().map(ToString::to_string),
        })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, TransportError> {
    address
        .parse()
        .map_err(|error| TransportError::InvalidMessage(format!("{address}: {error}")))
}

/// 5xx replies are permanent; everything else (4xx, I/O, TLS, timeouts) may pass on retry.
fn classify(error: &SmtpError) -> TransportError {
    if error.is_permanent() {
        TransportError::Rejected(error.to_string())
    } else {
        TransportError::Unavailable(error.to_string())
    }
}
