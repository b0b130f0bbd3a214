//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::ids::TypedId;

/// Image shown when a product has no usable image reference.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub category: String,
    pub image: String,
    pub stock: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Image filenames, split on commas or pipes.
    pub fn images(&self) -> Vec<&str> {
        split_images(&self.image)
    }

    /// First image filename, or the placeholder when none is set.
    pub fn primary_image(&self) -> &str {
        self.images().first().copied().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

pub(crate) fn split_images(raw: &str) -> Vec<&str> {
    raw.split([',', '|'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
