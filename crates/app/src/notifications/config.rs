//! Mail Config

use std::time::Duration;

use clap::Args;

use super::{retry::RetryPolicy, templates::Storefront};

/// Default endpoint for the transactional HTTP mail API.
pub const DEFAULT_MAIL_API_URL: &str = "https://send.api.mailtrap.io/api/send";

/// Email provider and composition settings.
#[derive(Debug, Clone, Args)]
pub struct MailConfig {
    /// Operator address that receives new-order notifications
    #[arg(long, env = "NOTIFY_EMAIL")]
    pub notify_email: Option<String>,

    /// Sender address for every outgoing email
    #[arg(long, env = "MAIL_FROM", default_value = "orders@localhost")]
    pub mail_from: String,

    /// Store name used in customer-facing emails
    #[arg(long, env = "STORE_NAME", default_value = "Storefront")]
    pub store_name: String,

    /// Currency symbol prefixed to amounts in emails
    #[arg(long, env = "CURRENCY_SYMBOL", default_value = "₹")]
    pub currency_symbol: String,

    /// SMTP relay host; the SMTP provider is skipped when unset
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay port (STARTTLS)
    #[arg(long, env = "SMTP_PORT", default_value_t = 587_u16)]
    pub smtp_port: u16,

    /// SMTP username
    #[arg(long, env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// HTTP mail API endpoint
    #[arg(long, env = "MAIL_API_URL", default_value = DEFAULT_MAIL_API_URL)]
    pub mail_api_url: String,

    /// HTTP mail API bearer token; the HTTP provider is skipped when unset
    #[arg(long, env = "MAIL_API_TOKEN", hide_env_values = true)]
    pub mail_api_token: Option<String>,

    /// Fall back to writing emails to the log when no real provider verifies
    #[arg(long, env = "MAIL_LOG_SINK", default_value_t = false)]
    pub mail_log_sink: bool,

    /// Attempts per email before giving up
    #[arg(long, env = "MAIL_SEND_ATTEMPTS", default_value_t = 3_u32)]
    pub mail_send_attempts: u32,

    /// Delay before the first retry, doubled for each further retry
    #[arg(long, env = "MAIL_RETRY_BACKOFF_MS", default_value_t = 1_000_u64)]
    pub mail_retry_backoff_ms: u64,
}

/// SMTP provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub credentials: Option<(String, String)>,
}

/// HTTP mail API provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApiSettings {
    pub url: String,
    pub token: String,
}

/// One slot in the provider chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Smtp(SmtpSettings),
    HttpApi(HttpApiSettings),
    Log,
}

impl MailConfig {
    /// Configured providers in preference order: SMTP, HTTP API, log sink.
    pub fn providers(&self) -> Vec<ProviderConfig> {
        let mut providers = Vec::with_capacity(3);

        if let Some(host) = non_blank(self.smtp_host.as_deref()) {
            let credentials = non_blank(self.smtp_username.as_deref())
                .zip(self.smtp_password.as_deref())
                .map(|(user, password)| (user.to_string(), password.to_string()));

            providers.push(ProviderConfig::Smtp(SmtpSettings {
                host: host.to_string(),
                port: self.smtp_port,
                credentials,
            }));
        }

        if let Some(token) = non_blank(self.mail_api_token.as_deref()) {
            providers.push(ProviderConfig::HttpApi(HttpApiSettings {
                url: self.mail_api_url.clone(),
                token: token.to_string(),
            }));
        }

        if self.mail_log_sink {
            providers.push(ProviderConfig::Log);
        }

        providers
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.mail_send_attempts,
            Duration::from_millis(self.mail_retry_backoff_ms),
        )
    }

    pub fn storefront(&self) -> Storefront {
        Storefront {
            name: self.store_name.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }

    /// Operator address, if one is configured and not blank.
    pub fn notify_address(&self) -> Option<&str> {
        non_blank(self.notify_email.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        mail: MailConfig,
    }

    fn parse(args: &[&str]) -> Result<MailConfig, clap::Error> {
        Cli::try_parse_from(std::iter::once("test").chain(args.iter().copied())).map(|cli| cli.mail)
    }

    #[test]
    fn nothing_configured_yields_empty_chain() -> Result<(), clap::Error> {
        let config = parse(&[])?;

        assert!(config.providers().is_empty());
        assert_eq!(config.retry_policy(), RetryPolicy::default());

        Ok(())
    }

    #[test]
    fn chain_is_ordered_smtp_api_log() -> Result<(), clap::Error> {
        let config = parse(&[
            "--mail-log-sink",
            "--mail-api-token",
            "secret",
            "--smtp-host",
            "smtp.example.com",
            "--smtp-username",
            "user",
            "--smtp-password",
            "pass",
        ])?;

        assert_eq!(
            config.providers(),
            vec![
                ProviderConfig::Smtp(SmtpSettings {
                    host: "smtp.example.com".to_string(),
                    port: 587,
                    credentials: Some(("user".to_string(), "pass".to_string())),
                }),
                ProviderConfig::HttpApi(HttpApiSettings {
                    url: DEFAULT_MAIL_API_URL.to_string(),
                    token: "secret".to_string(),
                }),
                ProviderConfig::Log,
            ]
        );

        Ok(())
    }

    #[test]
    fn blank_values_do_not_enable_providers() -> Result<(), clap::Error> {
        let config = parse(&["--smtp-host", " ", "--mail-api-token", "", "--notify-email", ""])?;

        assert!(config.providers().is_empty());
        assert_eq!(config.notify_address(), None);

        Ok(())
    }
}
