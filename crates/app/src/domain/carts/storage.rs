//! Cart persistence.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

use super::cart::Cart;

/// Storage key under which the cart list is kept.
pub const CART_KEY: &str = "ecom_cart_v1";

#[derive(Debug, Error)]
pub enum CartStorageError {
    #[error("failed to encode cart")]
    Encode(#[source] serde_json::Error),
}

/// Key-value storage holding the cart as a JSON list.
#[automock]
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Load the cart; a missing or unreadable value is an empty cart.
    async fn load(&self) -> Cart;

    async fn save(&self, cart: &Cart) -> Result<(), CartStorageError>;

    /// Remove the stored value entirely.
    async fn clear(&self);
}

/// In-process key-value store.
#[derive(Debug, Default)]
pub struct MemoryCartStorage {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryCartStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, as another client of the same store would see it.
    pub async fn raw(&self) -> Option<String> {
        self.values.lock().await.get(CART_KEY).cloned()
    }

    /// Overwrite the raw stored value.
    pub async fn put_raw(&self, value: impl Into<String>) {
        self.values
            .lock()
            .await
            .insert(CART_KEY.to_string(), value.into());
    }
}

#[async_trait]
impl CartStorage for MemoryCartStorage {
    async fn load(&self) -> Cart {
        let Some(raw) = self.raw().await else {
            return Cart::new();
        };

        serde_json::from_str(&raw).unwrap_or_else(|error| {
            warn!(key = CART_KEY, error = %error, "discarding unreadable cart");
            Cart::new()
        })
    }

    async fn save(&self, cart: &Cart) -> Result<(), CartStorageError> {
        let raw = serde_json::to_string(cart).map_err(CartStorageError::Encode)?;

        self.put_raw(raw).await;

        Ok(())
    }

    async fn clear(&self) {
        self.values.lock().await.remove(CART_KEY);
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::domain::products::records::ProductId;

    use super::*;

    #[tokio::test]
    async fn empty_store_loads_empty_cart() {
        let storage = MemoryCartStorage::new();

        assert!(storage.load().await.is_empty());
    }

    #[tokio::test]
    async fn saved_cart_is_stored_as_json_list() -> TestResult {
        let storage = MemoryCartStorage::new();
        let mut cart = Cart::new();

        cart.add(ProductId::from_i64(1), "Shirt", Decimal::from(899), 2);
        storage.save(&cart).await?;

        let raw: serde_json::Value = serde_json::from_str(&storage.raw().await.unwrap_or_default())?;

        assert_eq!(
            raw,
            serde_json::json!([
                {"productId": 1, "name": "Shirt", "price": "899", "quantity": 2}
            ])
        );
        assert_eq!(storage.load().await, cart);

        Ok(())
    }

    #[tokio::test]
    async fn corrupt_value_loads_empty_cart() {
        let storage = MemoryCartStorage::new();

        storage.put_raw("{not json").await;

        assert!(storage.load().await.is_empty());
    }

    #[tokio::test]
    async fn clear_removes_the_key() -> TestResult {
        let storage = MemoryCartStorage::new();

        storage.save(&Cart::new()).await?;
        storage.clear().await;

        assert_eq!(storage.raw().await, None);

        Ok(())
    }
}
