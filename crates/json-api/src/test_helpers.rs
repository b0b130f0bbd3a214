//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{orders::MockOrdersService, products::MockProductsService},
    notifications::{
        EmailOrderNotifier, Mailer, retry::RetryPolicy, templates::Storefront,
        transports::LogTransport,
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_count_products().never();
    products.expect_seed_products().never();

    products
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_get_order().never();

    orders
}

fn storefront() -> Storefront {
    Storefront {
        name: "Storefront".to_string(),
        currency_symbol: "₹".to_string(),
    }
}

pub(crate) fn mailer_with_log_transport() -> Mailer {
    Mailer::with_transport(
        Arc::new(LogTransport::new("orders@localhost")),
        RetryPolicy::none(),
    )
}

pub(crate) fn make_state(
    products: MockProductsService,
    orders: MockOrdersService,
    mailer: Mailer,
    admin_address: Option<&str>,
) -> Arc<State> {
    let mailer = Arc::new(mailer);
    let notifier = Arc::new(EmailOrderNotifier::new(
        Arc::clone(&mailer),
        admin_address.map(ToString::to_string),
        storefront(),
    ));

    State::from_app_context(AppContext {
        products: Arc::new(products),
        orders: Arc::new(orders),
        mailer,
        notifier,
    })
}

fn service_with_state(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn strict_service(route: Router) -> Service {
    service_with_state(
        make_state(
            strict_products_mock(),
            strict_orders_mock(),
            Mailer::disabled(),
            None,
        ),
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with_state(
        make_state(products, strict_orders_mock(), Mailer::disabled(), None),
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with_state(
        make_state(strict_products_mock(), orders, Mailer::disabled(), None),
        route,
    )
}

pub(crate) fn mail_service(mailer: Mailer, admin_address: Option<&str>, route: Router) -> Service {
    service_with_state(
        make_state(
            strict_products_mock(),
            strict_orders_mock(),
            mailer,
            admin_address,
        ),
        route,
    )
}
