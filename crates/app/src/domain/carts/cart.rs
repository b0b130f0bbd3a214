//! Client-side cart list.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    orders::data::{OrderRequestItem, RequestedQuantity},
    products::records::ProductId,
};

/// One product in the cart. `name` and `price` are display copies; orders are
/// always priced from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Ordered list of cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` of a product, merging into its existing line.
    pub fn add(&mut self, product_id: ProductId, name: &str, price: Decimal, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine {
            product_id,
            name: name.to_string(),
            price,
            quantity,
        });
    }

    /// Drop the line for `product_id`, if any.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Units across all lines, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of the display prices; the order total is computed server-side.
    pub fn estimated_total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.price.saturating_mul(Decimal::from(line.quantity)))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Items for an order request, in cart order.
    pub fn to_order_items(&self) -> Vec<OrderRequestItem> {
        self.lines
            .iter()
            .map(|line| OrderRequestItem {
                product_id: Some(line.product_id),
                quantity: RequestedQuantity::Whole(i64::from(line.quantity)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: i64) -> ProductId {
        ProductId::from_i64(raw)
    }

    #[test]
    fn add_merges_quantities_of_same_product() {
        let mut cart = Cart::new();

        cart.add(id(1), "Shirt", Decimal::from(899), 1);
        cart.add(id(2), "Lamp", Decimal::from(359), 1);
        cart.add(id(1), "Shirt", Decimal::from(899), 2);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn remove_drops_only_that_product() {
        let mut cart = Cart::new();

        cart.add(id(1), "Shirt", Decimal::from(899), 1);
        cart.add(id(2), "Lamp", Decimal::from(359), 1);
        cart.remove(id(1));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, id(2));

        cart.remove(id(42));

        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();

        cart.add(id(1), "Shirt", Decimal::from(899), 5);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn estimated_total_uses_display_prices() {
        let mut cart = Cart::new();

        cart.add(id(1), "Shirt", Decimal::from(899), 2);
        cart.add(id(2), "Lamp", Decimal::new(35950, 2), 1);

        assert_eq!(cart.estimated_total(), Decimal::new(215750, 2));
    }

    #[test]
    fn to_order_items_keeps_cart_order() {
        let mut cart = Cart::new();

        cart.add(id(2), "Lamp", Decimal::from(359), 3);
        cart.add(id(1), "Shirt", Decimal::from(899), 1);

        assert_eq!(
            cart.to_order_items(),
            vec![
                OrderRequestItem {
                    product_id: Some(id(2)),
                    quantity: RequestedQuantity::Whole(3),
                },
                OrderRequestItem {
                    product_id: Some(id(1)),
                    quantity: RequestedQuantity::Whole(1),
                },
            ]
        );
    }
}
