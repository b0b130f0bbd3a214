//! Storefront domain, persistence and notification modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod lenient;
pub mod notifications;

#[cfg(test)]
mod test;
