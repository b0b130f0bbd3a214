//! Test Helpers

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::mpsc;

use crate::{
    domain::{
        orders::{
            data::{OrderRequest, OrderRequestItem, RequestedQuantity},
            records::OrderRecord,
        },
        products::{
            data::{DEFAULT_STOCK, NewProduct},
            records::ProductId,
        },
    },
    notifications::OrderNotifier,
};

pub(crate) fn new_product(name: &str, category: &str, price: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: format!("<p>{name}</p>"),
        price: Decimal::from(price),
        original_price: None,
        category: category.to_string(),
        image: format!("{}.jpg", name.to_lowercase()),
        stock: DEFAULT_STOCK,
    }
}

pub(crate) fn order_request(items: Vec<OrderRequestItem>) -> OrderRequest {
    OrderRequest {
        customer_name: "Asha".to_string(),
        customer_email: Some("asha@example.com".to_string()),
        customer_phone: Some("9876543210".to_string()),
        address: "12 MG Road, Bengaluru".to_string(),
        items,
    }
}

pub(crate) fn order_request_item(product: ProductId, quantity: i64) -> OrderRequestItem {
    OrderRequestItem {
        product_id: Some(product),
        quantity: RequestedQuantity::Whole(quantity),
    }
}

/// Forwards every placed order to a channel.
pub(crate) struct RecordingNotifier {
    sender: mpsc::UnboundedSender<OrderRecord>,
}

impl RecordingNotifier {
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<OrderRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }
}

#[async_trait]
impl OrderNotifier for RecordingNotifier {
    async fn order_placed(&self, order: &OrderRecord) {
        let _ = self.sender.send(order.clone());
    }
}

/// Signals the channel, then panics, standing in for a provider that throws.
pub(crate) struct PanickingNotifier {
    sender: mpsc::UnboundedSender<OrderRecord>,
}

impl PanickingNotifier {
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<OrderRecord>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }
}

#[async_trait]
impl OrderNotifier for PanickingNotifier {
    async fn order_placed(&self, order: &OrderRecord) {
        let _ = self.sender.send(order.clone());

        panic!("notifier exploded for {}", order.reference.as_str());
    }
}
