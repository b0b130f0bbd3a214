//! Storefront JSON API Healthcheck Handlers

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Routes listed by the API info endpoint.
const ENDPOINTS: [&str; 7] = [
    "GET /api/products",
    "GET /api/products/:id",
    "POST /api/orders",
    "GET /api/orders/:id",
    "GET /api/health",
    "GET /api/ping",
    "GET /api/test-email",
];

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HealthResponse {
    /// Service status
    pub status: String,

    /// Short description of the status
    pub message: String,

    /// Current server time
    pub timestamp: String,

    /// Server version
    pub version: String,

    /// Seconds since the server started
    pub uptime: f64,

    /// Whether an email provider verified at startup
    pub email_configured: bool,
}

/// API info response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiInfoResponse {
    pub message: String,

    pub version: String,

    /// Available routes
    pub endpoints: Vec<String>,

    /// Whether an email provider verified at startup
    pub email_configured: bool,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        message: "API is running".to_string(),
        timestamp: Timestamp::now().to_string(),
        version: VERSION.to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        email_configured: state.app.mailer.is_configured().await,
    }))
}

/// Ping handler for uptime pingers
#[handler]
pub(crate) async fn ping(res: &mut Response) {
    res.render(Text::Plain("pong"));
}

/// API info handler
///
/// Lists the available routes
#[endpoint(tags("health"), summary = "API information")]
pub(crate) async fn info(depot: &mut Depot) -> Result<Json<ApiInfoResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(ApiInfoResponse {
        message: "Storefront API Server".to_string(),
        version: VERSION.to_string(),
        endpoints: ENDPOINTS.iter().map(ToString::to_string).collect(),
        email_configured: state.app.mailer.is_configured().await,
    }))
}
