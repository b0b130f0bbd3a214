//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::products::records::ProductId;

use super::{data::InvalidOrder, pricing::PricingError};

/// `numeric_value_out_of_range`
const NUMERIC_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("invalid order payload: {0}")]
    InvalidPayload(#[from] InvalidOrder),

    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("order not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let out_of_range = error
            .as_database_error()
            .and_then(|database_error| database_error.code())
            .is_some_and(|code| code == NUMERIC_OUT_OF_RANGE);

        if out_of_range {
            return Self::InvalidPayload(InvalidOrder::TotalOutOfRange);
        }

        Self::Sql(error)
    }
}

impl From<PricingError> for OrdersServiceError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::UnknownProduct(product) => Self::ProductNotFound(product),
            PricingError::Invalid(reason) => Self::InvalidPayload(reason),
        }
    }
}
