//! Money rendering.
//!
//! Amounts are `Decimal` in the domain and JSON numbers on the wire.

use rust_decimal::{Decimal, prelude::ToPrimitive as _};

pub(crate) fn to_json_number(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}
