//! Transactional HTTP mail API provider.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::notifications::{
    config::HttpApiSettings,
    errors::TransportError,
    message::{EmailMessage, SentReceipt},
    transport::Transport,
};

use super::TRANSPORT_TIMEOUT;

/// Client for a Mailtrap-style `POST /api/send` endpoint with bearer auth.
#[derive(Debug, Clone)]
pub struct HttpApiTransport {
    url: Url,
    token: String,
    from: String,
    http: Client,
}

impl HttpApiTransport {
    /// # Errors
    ///
    /// Returns an error when the URL is invalid or the HTTP client cannot be built.
    pub fn new(settings: &HttpApiSettings, from: &str) -> Result<Self, TransportError> {
        let url = Url::parse(&settings.url).map_err(|error| {
            TransportError::InvalidMessage(format!("mail API url {}: {error}", settings.url))
        })?;

        let http = Client::builder()
            .timeout(TRANSPORT_TIMEOUT)
            .build()
            .map_err(|error| TransportError::Unavailable(error.to_string()))?;

        Ok(Self {
            url,
            token: settings.token.clone(),
            from: from.to_string(),
            http,
        })
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: Address<'a>,
    to: [Address<'a>; 1],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SendResponse {
    #[serde(default)]
    message_ids: Vec<String>,
}

#[async_trait]
impl Transport for HttpApiTransport {
    fn name(&self) -> &'static str {
        "http-api"
    }

    /// Calls the endpoint with the bearer token. Any answer other than an auth
    /// failure or a server error means the API is reachable with these credentials.
    async fn verify(&self) -> Result<(), TransportError> {
        if self.token.trim().is_empty() {
            return Err(TransportError::Rejected("mail API token is empty".to_string()));
        }

        if !matches!(self.url.scheme(), "http" | "https") {
            return Err(TransportError::InvalidMessage(format!(
                "mail API url must be http(s): {}",
                self.url
            )));
        }

        let response = self
            .http
            .get(self.url.clone())
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|error| TransportError::Unavailable(error.to_string()))?;

        let status = response.status();

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            || status.is_server_error()
        {
            let text = response.text().await.unwrap_or_default();

            return Err(classify_status(status, &text));
        }

        Ok(())
    }

    async fn send(&self, message: &EmailMessage) -> Result<SentReceipt, TransportError> {
        let body = SendRequest {
            from: Address { email: &self.from },
            to: [Address { email: &message.to }],
            subject: &message.subject,
            text: &message.text,
            html: message.html.as_deref(),
        };

        let response = self
            .http
            .post(self.url.clone())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|error| TransportError::Unavailable(error.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(classify_status(status, &text));
        }

        let parsed: SendResponse = response.json().await.unwrap_or_default();

        Ok(SentReceipt {
            provider: self.name(),
            message_id: parsed.message_ids.into_iter().next(),
        })
    }
}

/// Throttling and server errors are worth retrying; other client errors are not.
fn classify_status(status: StatusCode, body: &str) -> TransportError {
    let detail = format!("mail API responded with status {status}: {body}");

    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        TransportError::Unavailable(detail)
    } else {
        TransportError::Rejected(detail)
    }
}
