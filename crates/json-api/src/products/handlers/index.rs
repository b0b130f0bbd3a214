//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::debug;

use storefront_app::domain::products::data::ProductFilter;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::get::ProductResponse, state::State,
};

/// Product Index Handler
///
/// Returns a page of products in catalog order, optionally restricted to one category.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    limit: QueryParam<String, false>,
    offset: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = ProductFilter::new(category.into_inner(), (limit, offset).into_pagination());

    debug!(
        category = filter.category().unwrap_or("none"),
        limit = filter.pagination().limit(),
        offset = filter.pagination().offset(),
        "listing products"
    );

    let products = state
        .app
        .products
        .list_products(filter)
        .await
        .map_err(into_api_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
