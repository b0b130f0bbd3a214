//! Provider implementations.

use std::sync::Arc;

use tracing::warn;

use super::{config::ProviderConfig, transport::Transport};

pub mod http_api;
pub mod log;
pub mod smtp;

pub use http_api::HttpApiTransport;
pub use log::LogTransport;
pub use smtp::SmtpTransport;

/// Connect and request timeout for network providers.
pub const TRANSPORT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Build a transport for each configured provider, keeping their order.
///
/// Providers whose settings cannot be turned into a client are logged and left out.
pub fn build_chain(providers: &[ProviderConfig], from: &str) -> Vec<Arc<dyn Transport>> {
    let mut chain: Vec<Arc<dyn Transport>> = Vec::with_capacity(providers.len());

    for provider in providers {
        let built: Result<Arc<dyn Transport>, _> = match provider {
            ProviderConfig::Smtp(settings) => {
                SmtpTransport::new(settings, from).map(|t| Arc::new(t) as Arc<dyn Transport>)
            }
            ProviderConfig::HttpApi(settings) => {
                HttpApiTransport::new(settings, from).map(|t| Arc::new(t) as Arc<dyn Transport>)
            }
            ProviderConfig::Log => Ok(Arc::new(LogTransport::new(from)) as Arc<dyn Transport>),
        };

        match built {
            Ok(transport) => chain.push(transport),
            Err(error) => warn!(error = %error, "skipping mail provider"),
        }
    }

    chain
}
