//! Orders

mod errors;
mod handlers;
mod payload;

pub(crate) use handlers::*;
