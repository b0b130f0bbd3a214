//! Create Order Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use storefront_app::domain::orders::data::OrderRequest;

use crate::{
    errors::ApiError,
    extensions::*,
    observability::record_order_placed,
    orders::{
        errors::{INVALID_PAYLOAD, into_api_error},
        payload::CreateOrderPayload,
    },
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderCreatedResponse {
    /// Always `true`
    pub success: bool,

    /// Public order reference
    pub order_id: String,
}

/// Create Order Handler
///
/// Prices the items from the catalog, stores the order and queues the
/// notification emails.
#[endpoint(tags("orders"), summary = "Create Order")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let payload = req
        .parse_json::<CreateOrderPayload>()
        .await
        .map_err(|error| {
            warn!("unreadable order body: {error}");

            ApiError::bad_request(INVALID_PAYLOAD)
        })?;

    let order = state
        .app
        .orders
        .create_order(OrderRequest::from(payload))
        .await
        .map_err(into_api_error)?;

    record_order_placed();

    Ok(Json(OrderCreatedResponse {
        success: true,
        order_id: order.reference.into_string(),
    }))
}
