//! Products Data

use rust_decimal::Decimal;

use crate::lenient::parse_int_prefix;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Stock level assigned to imported products that do not specify one.
pub const DEFAULT_STOCK: i32 = 100;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub category: String,
    pub image: String,
    pub stock: i32,
}

/// Limit/offset window over the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

impl Pagination {
    /// Build a window, clamping `limit` to at least 1 and `offset` to at least 0.
    #[must_use]
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.max(1),
            offset: offset.max(0),
        }
    }

    /// Build a window from raw query-string values.
    ///
    /// A missing, unparsable or zero limit falls back to [`DEFAULT_PAGE_SIZE`];
    /// a missing or unparsable offset falls back to 0.
    #[must_use]
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(parse_int_prefix)
            .filter(|limit| *limit != 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let offset = offset.and_then(parse_int_prefix).unwrap_or(0);

        Self::new(limit, offset)
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

/// Catalog listing filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    category: Option<String>,
    pagination: Pagination,
}

impl ProductFilter {
    /// Blank categories are treated as "no filter".
    #[must_use]
    pub fn new(category: Option<String>, pagination: Pagination) -> Self {
        Self {
            category: category.filter(|category| !category.trim().is_empty()),
            pagination,
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}
