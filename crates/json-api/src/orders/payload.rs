//! Order request body.
//!
//! Clients send ids and quantities as numbers or strings; the body is read
//! loosely here and the domain decides what is usable.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use serde::Deserialize;
use serde_json::Value;

use storefront_app::domain::{
    orders::data::{OrderRequest, OrderRequestItem, RequestedQuantity},
    products::records::ProductId,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CreateOrderPayload {
    customer_name: Option<String>,
    customer_email: Option<String>,
    customer_phone: Option<String>,
    address: Option<String>,
    items: Option<Vec<OrderItemPayload>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct OrderItemPayload {
    product_id: Value,
    quantity: Value,
}

impl From<CreateOrderPayload> for OrderRequest {
    fn from(payload: CreateOrderPayload) -> Self {
        OrderRequest {
            customer_name: payload.customer_name.unwrap_or_default(),
            customer_email: payload.customer_email,
            customer_phone: payload.customer_phone,
            address: payload.address.unwrap_or_default(),
            items: payload
                .items
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<OrderItemPayload> for OrderRequestItem {
    fn from(item: OrderItemPayload) -> Self {
        OrderRequestItem {
            product_id: product_id(&item.product_id),
            quantity: quantity(item.quantity),
        }
    }
}

fn product_id(value: &Value) -> Option<ProductId> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_number))
            .map(ProductId::from_i64),
        Value::String(raw) => raw.parse().ok(),
        _ => None,
    }
}

/// `1.0` names product 1; `1.5` names nothing.
fn whole_number(value: f64) -> Option<i64> {
    let decimal = Decimal::from_f64(value)?;

    if decimal.fract().is_zero() {
        decimal.to_i64()
    } else {
        None
    }
}

fn quantity(value: Value) -> RequestedQuantity {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(whole) => RequestedQuantity::Whole(whole),
            None => number
                .as_f64()
                .map_or(RequestedQuantity::Absent, RequestedQuantity::Fractional),
        },
        Value::String(raw) => RequestedQuantity::Text(raw),
        _ => RequestedQuantity::Absent,
    }
}
