//! Catalog seed import.
//!
//! The storefront catalog is read-only at runtime; products arrive through a
//! one-time import of a YAML document shaped like `seed/products.yaml`.

use std::{fs, io, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::products::{
    ProductsService, ProductsServiceError,
    data::{DEFAULT_STOCK, NewProduct},
};

const DEFAULT_CATALOG: &str = include_str!("../../../seed/products.yaml");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read catalog file")]
    Io(#[from] io::Error),

    #[error("failed to parse catalog")]
    Parse(#[from] serde_norway::Error),

    #[error("product {name:?} has a negative price")]
    NegativePrice { name: String },

    #[error("product {name:?} has a negative stock level")]
    NegativeStock { name: String },

    #[error("failed to store catalog")]
    Products(#[from] ProductsServiceError),
}

/// What a conditional seed did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already had products; nothing was written.
    Skipped { existing: i64 },

    /// The catalog was empty and this many products were imported.
    Seeded { created: usize },
}

#[derive(Debug, Deserialize)]
struct SeedCatalog {
    products: Vec<SeedProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedProduct {
    name: String,
    description: String,
    price: Decimal,
    #[serde(default)]
    original_price: Option<Decimal>,
    category: String,
    image: SeedImages,
    #[serde(default = "default_stock")]
    stock: i32,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedImages {
    Joined(String),
    List(Vec<String>),
}

fn default_stock() -> i32 {
    DEFAULT_STOCK
}

impl TryFrom<SeedProduct> for NewProduct {
    type Error = SeedError;

    fn try_from(product: SeedProduct) -> Result<Self, Self::Error> {
        if product.price < Decimal::ZERO {
            return Err(SeedError::NegativePrice { name: product.name });
        }

        if product.stock < 0 {
            return Err(SeedError::NegativeStock { name: product.name });
        }

        let image = match product.image {
            SeedImages::Joined(image) => image,
            SeedImages::List(images) => images.join(","),
        };

        Ok(NewProduct {
            name: product.name,
            description: product.description.trim_end().to_string(),
            price: product.price,
            original_price: product.original_price,
            category: product.category,
            image,
            stock: product.stock,
        })
    }
}

/// Parse a YAML catalog document.
///
/// # Errors
///
/// Returns an error when the document is malformed or a product is invalid.
pub fn parse_catalog(yaml: &str) -> Result<Vec<NewProduct>, SeedError> {
    let catalog: SeedCatalog = serde_norway::from_str(yaml)?;

    catalog
        .products
        .into_iter()
        .map(NewProduct::try_from)
        .collect()
}

/// The catalog bundled with the application.
///
/// # Errors
///
/// Returns an error if the bundled document is invalid.
pub fn default_catalog() -> Result<Vec<NewProduct>, SeedError> {
    parse_catalog(DEFAULT_CATALOG)
}

/// Read and parse a catalog from disk.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<Vec<NewProduct>, SeedError> {
    parse_catalog(&fs::read_to_string(path)?)
}

/// Import `catalog` only when the store has no products yet.
///
/// # Errors
///
/// Returns an error when counting or inserting products fails.
pub async fn seed_if_empty(
    products: &dyn ProductsService,
    catalog: Vec<NewProduct>,
) -> Result<SeedOutcome, SeedError> {
    let existing = products.count_products().await?;

    if existing > 0 {
        info!(existing, "catalog already populated, skipping seed");

        return Ok(SeedOutcome::Skipped { existing });
    }

    let created = products.seed_products(catalog).await?.len();

    info!(created, "seeded product catalog");

    Ok(SeedOutcome::Seeded { created })
}
