//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::products::records::{ProductId, ProductRecord};

use crate::{
    errors::ApiError, extensions::*, money::to_json_number, products::errors::into_api_error,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The product id
    pub id: i64,

    /// Display name
    pub name: String,

    /// Rich text description
    pub description: String,

    /// Current price
    pub price: f64,

    /// Price before discount, when discounted
    pub original_price: Option<f64>,

    /// Catalog category
    pub category: String,

    /// Image filenames as stored, comma or pipe delimited
    pub image: String,

    /// Image filenames split into a list
    pub images: Vec<String>,

    /// First image, or the placeholder when there is none
    pub primary_image: String,

    /// Units in stock
    pub stock: i32,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        let images = product.images().into_iter().map(str::to_string).collect();
        let primary_image = product.primary_image().to_string();

        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            description: product.description,
            price: to_json_number(product.price),
            original_price: product.original_price.map(to_json_number),
            category: product.category,
            image: product.image,
            images,
            primary_image,
            stock: product.stock,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Ok(product) = id.into_inner().parse::<ProductId>() else {
        return Err(ApiError::not_found("Not found"));
    };

    let product = state
        .app
        .products
        .get_product(product)
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}
