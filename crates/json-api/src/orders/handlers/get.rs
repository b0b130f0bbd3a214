//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::orders::{
    records::{LineItem, OrderRecord},
    reference::OrderReference,
};

use crate::{
    errors::ApiError, extensions::*, money::to_json_number, orders::errors::into_api_error,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItemResponse {
    /// Product the line was priced from
    pub product_id: i64,

    /// Product name at order time
    pub name: String,

    /// Unit price at order time
    pub unit_price: f64,

    /// Units ordered
    pub quantity: u32,

    /// `unitPrice × quantity`
    pub line_total: f64,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        LineItemResponse {
            product_id: item.product_id.into_i64(),
            name: item.name,
            unit_price: to_json_number(item.unit_price),
            quantity: item.quantity,
            line_total: to_json_number(item.line_total),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// Public order reference
    pub id: String,

    pub customer_name: String,

    pub customer_email: Option<String>,

    pub customer_phone: Option<String>,

    /// Delivery address
    pub address: String,

    /// Priced lines in request order
    pub items: Vec<LineItemResponse>,

    /// Sum of all line totals
    pub total: f64,

    /// Fulfilment status
    pub status: String,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.reference.into_string(),
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            address: order.address,
            items: order.items.into_iter().map(Into::into).collect(),
            total: to_json_number(order.total),
            status: order.status,
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns an order with its line items.
#[endpoint(tags("orders"), summary = "Get Order")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    if !OrderReference::is_well_formed(&id) {
        return Err(ApiError::not_found("Order not found"));
    }

    let order = state
        .app
        .orders
        .get_order(OrderReference::from_string(id))
        .await
        .map_err(into_api_error)?;

    Ok(Json(order.into()))
}
