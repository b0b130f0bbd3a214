//! Domain services and persistence.

pub mod carts;
pub mod orders;
pub mod products;
