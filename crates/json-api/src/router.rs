//! App Router

use salvo::Router;

use crate::{healthcheck, mail, orders, products};

pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .get(healthcheck::info)
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("ping").get(healthcheck::ping))
        .push(Router::with_path("test-email").get(mail::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("{id}").get(orders::get::handler)),
        )
}
