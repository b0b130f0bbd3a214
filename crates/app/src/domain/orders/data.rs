//! Orders Data

use thiserror::Error;

use crate::{
    domain::products::records::ProductId,
    lenient::{parse_int_prefix, truncate_float},
};

/// Quantity used when the requested one cannot be read as a positive integer.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Order as submitted by a client, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub address: String,
    pub items: Vec<OrderRequestItem>,
}

/// One requested line; `product_id` is `None` when the client sent something unreadable.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequestItem {
    pub product_id: Option<ProductId>,
    pub quantity: RequestedQuantity,
}

/// Quantity exactly as the client expressed it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestedQuantity {
    Whole(i64),
    Fractional(f64),
    Text(String),
    #[default]
    Absent,
}

impl RequestedQuantity {
    /// Read the leading integer, falling back to [`DEFAULT_QUANTITY`] when it is
    /// missing, not positive, or too large.
    pub fn resolve(&self) -> u32 {
        let parsed = match self {
            Self::Whole(value) => Some(*value),
            Self::Fractional(value) => truncate_float(*value),
            Self::Text(raw) => parse_int_prefix(raw),
            Self::Absent => None,
        };

        parsed
            .filter(|quantity| *quantity > 0)
            .and_then(|quantity| u32::try_from(quantity).ok())
            .unwrap_or(DEFAULT_QUANTITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOrder {
    #[error("customer name is required")]
    MissingCustomerName,

    #[error("address is required")]
    MissingAddress,

    #[error("at least one item is required")]
    NoItems,

    #[error("item {index} has no usable product id")]
    MissingProductId { index: usize },

    #[error("order total is out of range")]
    TotalOutOfRange,
}

/// Order that passed validation; every line names a product and a positive quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub address: String,
    pub items: Vec<ValidatedItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl ValidatedOrder {
    /// Distinct product ids in first-seen order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = Vec::with_capacity(self.items.len());

        for item in &self.items {
            if !ids.contains(&item.product_id) {
                ids.push(item.product_id);
            }
        }

        ids
    }
}

impl OrderRequest {
    /// Check the required fields and coerce quantities.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking the customer, then the address,
    /// then each item in order.
    pub fn validate(self) -> Result<ValidatedOrder, InvalidOrder> {
        let customer_name = required(self.customer_name).ok_or(InvalidOrder::MissingCustomerName)?;
        let address = required(self.address).ok_or(InvalidOrder::MissingAddress)?;

        if self.items.is_empty() {
            return Err(InvalidOrder::NoItems);
        }

        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let product_id = item
                    .product_id
                    .ok_or(InvalidOrder::MissingProductId { index })?;

                Ok(ValidatedItem {
                    product_id,
                    quantity: item.quantity.resolve(),
                })
            })
            .collect::<Result<Vec<_>, InvalidOrder>>()?;

        Ok(ValidatedOrder {
            customer_name,
            customer_email: self.customer_email.and_then(required),
            customer_phone: self.customer_phone.and_then(required),
            address,
            items,
        })
    }
}

/// Trimmed value, or `None` when blank.
fn required(value: String) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: Vec<OrderRequestItem>) -> OrderRequest {
        OrderRequest {
            customer_name: "Asha".to_string(),
            customer_email: Some("asha@example.com".to_string()),
            customer_phone: None,
            address: "12 MG Road".to_string(),
            items,
        }
    }

    fn item(id: i64, quantity: RequestedQuantity) -> OrderRequestItem {
        OrderRequestItem {
            product_id: Some(ProductId::from_i64(id)),
            quantity,
        }
    }

    #[test]
    fn quantity_coercion() {
        let cases = [
            (RequestedQuantity::Whole(3), 3),
            (RequestedQuantity::Text("3".to_string()), 3),
            (RequestedQuantity::Text("2abc".to_string()), 2),
            (RequestedQuantity::Fractional(2.9), 2),
            (RequestedQuantity::Absent, 1),
            (RequestedQuantity::Whole(0), 1),
            (RequestedQuantity::Whole(-4), 1),
            (RequestedQuantity::Text("abc".to_string()), 1),
            (RequestedQuantity::Text(String::new()), 1),
            (RequestedQuantity::Fractional(0.5), 1),
            (RequestedQuantity::Fractional(f64::NAN), 1),
            (RequestedQuantity::Whole(i64::from(u32::MAX) + 1), 1),
        ];

        for (quantity, expected) in cases {
            assert_eq!(quantity.resolve(), expected, "{quantity:?}");
        }
    }

    #[test]
    fn validate_keeps_items_in_request_order() -> Result<(), InvalidOrder> {
        let order = request(vec![
            item(2, RequestedQuantity::Whole(1)),
            item(1, RequestedQuantity::Text("4".to_string())),
        ])
        .validate()?;

        assert_eq!(
            order.items,
            vec![
                ValidatedItem {
                    product_id: ProductId::from_i64(2),
                    quantity: 1,
                },
                ValidatedItem {
                    product_id: ProductId::from_i64(1),
                    quantity: 4,
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn validate_rejects_blank_name_and_address() {
        let mut blank_name = request(vec![item(1, RequestedQuantity::Absent)]);
        blank_name.customer_name = "   ".to_string();

        let mut blank_address = request(vec![item(1, RequestedQuantity::Absent)]);
        blank_address.address = String::new();

        assert_eq!(
            blank_name.validate(),
            Err(InvalidOrder::MissingCustomerName)
        );
        assert_eq!(blank_address.validate(), Err(InvalidOrder::MissingAddress));
    }

    #[test]
    fn validate_rejects_empty_items() {
        assert_eq!(request(Vec::new()).validate(), Err(InvalidOrder::NoItems));
    }

    #[test]
    fn validate_rejects_item_without_product_id() {
        let result = request(vec![
            item(1, RequestedQuantity::Absent),
            OrderRequestItem {
                product_id: None,
                quantity: RequestedQuantity::Whole(1),
            },
        ])
        .validate();

        assert_eq!(result, Err(InvalidOrder::MissingProductId { index: 1 }));
    }

    #[test]
    fn blank_contact_details_are_dropped() -> Result<(), InvalidOrder> {
        let mut raw = request(vec![item(1, RequestedQuantity::Absent)]);
        raw.customer_email = Some("  ".to_string());
        raw.customer_phone = Some(" 98765 43210 ".to_string());

        let order = raw.validate()?;

        assert_eq!(order.customer_email, None);
        assert_eq!(order.customer_phone.as_deref(), Some("98765 43210"));

        Ok(())
    }

    #[test]
    fn product_ids_are_distinct_in_first_seen_order() -> Result<(), InvalidOrder> {
        let order = request(vec![
            item(3, RequestedQuantity::Absent),
            item(1, RequestedQuantity::Absent),
            item(3, RequestedQuantity::Absent),
        ])
        .validate()?;

        assert_eq!(
            order.product_ids(),
            vec![ProductId::from_i64(3), ProductId::from_i64(1)]
        );

        Ok(())
    }
}
