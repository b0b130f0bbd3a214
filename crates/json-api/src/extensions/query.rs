//! Pagination query parsing helpers.

use salvo::oapi::extract::QueryParam;

use storefront_app::domain::products::data::Pagination;

/// Lenient `limit`/`offset` parsing; junk values fall back to defaults.
pub(crate) trait PaginationExt {
    fn into_pagination(self) -> Pagination;
}

impl PaginationExt for (QueryParam<String, false>, QueryParam<String, false>) {
    fn into_pagination(self) -> Pagination {
        let (limit, offset) = self;

        let limit = limit.into_inner();
        let offset = offset.into_inner();

        Pagination::from_raw(limit.as_deref(), offset.as_deref())
    }
}
