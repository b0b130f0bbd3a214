//! Order Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::products::records::ProductId, ids::TypedId};

use super::reference::OrderReference;

/// Status assigned to every newly placed order.
pub const PENDING_STATUS: &str = "pending";

/// Order Id
pub type OrderId = TypedId<OrderRecord>;

/// Snapshot of one purchased product, frozen at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub reference: OrderReference,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub address: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OrderRecord {
    /// Total number of units across all line items.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_items_serialize_with_camel_case_keys() -> serde_json::Result<()> {
        let item = LineItem {
            product_id: ProductId::from_i64(1),
            name: "Shirt".to_string(),
            unit_price: Decimal::new(89900, 2),
            quantity: 2,
            line_total: Decimal::new(179800, 2),
        };

        let value = serde_json::to_value(&item)?;

        assert_eq!(
            value,
            serde_json::json!({
                "productId": 1,
                "name": "Shirt",
                "unitPrice": "899.00",
                "quantity": 2,
                "lineTotal": "1798.00",
            })
        );

        let back: LineItem = serde_json::from_value(value)?;

        assert_eq!(back, item);

        Ok(())
    }
}
