//! HTTP span helpers.

use storefront_app::domain::orders::reference::OrderReference;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Collapse ids and order references so routes keep a bounded label set.
fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            normalised.push_str("{id}");
        } else if OrderReference::is_well_formed(segment) {
            normalised.push_str("{reference}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_collapsed() {
        let names = request_span_name("GET", "/api/products/42");

        assert_eq!(names.otel_path, "/api/products/{id}");
        assert_eq!(names.otel_span_name, "GET /api/products/{id}");
    }

    #[test]
    fn order_references_are_collapsed() {
        let names = request_span_name("GET", "/api/orders/ORD-7KQ2M9XH4P");

        assert_eq!(names.otel_path, "/api/orders/{reference}");
    }

    #[test]
    fn static_paths_are_kept() {
        assert_eq!(request_span_name("GET", "/").otel_path, "/");
        assert_eq!(
            request_span_name("POST", "/api/orders").otel_path,
            "/api/orders"
        );
        assert_eq!(
            request_span_name("GET", "/api/products/shirt").otel_path,
            "/api/products/shirt"
        );
    }
}
