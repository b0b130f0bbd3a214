//! Order pricing against stored product prices.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::domain::products::records::{ProductId, ProductRecord};

use super::{
    data::{InvalidOrder, ValidatedItem},
    records::LineItem,
};

/// Line items and their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    /// The first requested product that the catalog does not hold.
    UnknownProduct(ProductId),

    Invalid(InvalidOrder),
}

/// Price `items` using the catalog prices in `products`.
///
/// # Errors
///
/// Returns [`PricingError::UnknownProduct`] for the first item, in request order,
/// whose product is missing, and [`InvalidOrder::TotalOutOfRange`] when a line
/// total or the order total overflows.
pub fn price_items(
    items: &[ValidatedItem],
    products: &[ProductRecord],
) -> Result<PricedOrder, PricingError> {
    let catalog: FxHashMap<ProductId, &ProductRecord> = products
        .iter()
        .map(|product| (product.id, product))
        .collect();

    let mut total = Decimal::ZERO;
    let mut priced = Vec::with_capacity(items.len());

    for item in items {
        let product = catalog
            .get(&item.product_id)
            .ok_or(PricingError::UnknownProduct(item.product_id))?;

        let line_total = product
            .price
            .checked_mul(Decimal::from(item.quantity))
            .ok_or(PricingError::Invalid(InvalidOrder::TotalOutOfRange))?;

        total = total
            .checked_add(line_total)
            .ok_or(PricingError::Invalid(InvalidOrder::TotalOutOfRange))?;

        priced.push(LineItem {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: item.quantity,
            line_total,
        });
    }

    Ok(PricedOrder {
        items: priced,
        total,
    })
}
