//! Cross-origin request handling.

use salvo::{
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue},
    },
};
use tracing::warn;

use crate::config::cors::CorsConfig;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Allow the configured origins to call the API with credentials.
pub(crate) fn cors_handler(config: &CorsConfig) -> CorsHandler {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(source) => {
                warn!(origin, "ignoring invalid allowed origin: {source}");
                None
            }
        })
        .collect();

    Cors::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![CONTENT_TYPE, AUTHORIZATION, REQUEST_ID_HEADER])
        .expose_headers(vec![REQUEST_ID_HEADER])
        .allow_credentials(true)
        .into_handler()
}
