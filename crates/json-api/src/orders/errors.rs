//! Order Errors

use tracing::{error, warn};

use storefront_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) const INVALID_PAYLOAD: &str = "Invalid order payload";

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::InvalidPayload(reason) => {
            warn!("rejected order: {reason}");

            ApiError::bad_request(INVALID_PAYLOAD)
        }
        OrdersServiceError::ProductNotFound(_) => ApiError::bad_request(error.to_string()),
        OrdersServiceError::NotFound => ApiError::not_found("Order not found"),
        OrdersServiceError::Sql(source) => {
            error!("order storage failed: {source}");

            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use storefront_app::domain::{
        orders::data::InvalidOrder, products::records::ProductId,
    };

    use super::*;

    #[test]
    fn unknown_product_names_the_id() {
        let error = into_api_error(OrdersServiceError::ProductNotFound(ProductId::from_i64(999)));

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Product 999 not found");
    }

    #[test]
    fn validation_reason_is_not_exposed() {
        let error = into_api_error(OrdersServiceError::InvalidPayload(InvalidOrder::NoItems));

        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), INVALID_PAYLOAD);
    }
}
