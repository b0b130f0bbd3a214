//! Test support: per-test databases and service contexts.

pub(crate) mod db;
pub(crate) mod helpers;

pub(crate) use context::TestContext;
