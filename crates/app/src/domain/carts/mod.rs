//! Carts
//!
//! Models the browser's locally stored cart (`ecom_cart_v1`). No HTTP route
//! serves it; a checkout turns it into order items with [`Cart::to_order_items`].

pub mod cart;
pub mod storage;

pub use cart::{Cart, CartLine};
pub use storage::{CART_KEY, CartStorage, CartStorageError, MemoryCartStorage};
