//! Product Errors

use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::not_found("Not found"),
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            error!("product data rejected by storage: {error}");

            ApiError::internal()
        }
        ProductsServiceError::Sql(source) => {
            error!("failed to read products: {source}");

            ApiError::internal()
        }
    }
}
