//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{Instrument, info, info_span};

use crate::{
    database::Db,
    domain::{
        orders::{
            data::{OrderRequest, ValidatedOrder},
            errors::OrdersServiceError,
            pricing::price_items,
            records::OrderRecord,
            reference::OrderReference,
            repository::{NewOrder, PgOrdersRepository},
        },
        products::repository::PgProductsRepository,
    },
    notifications::OrderNotifier,
};

#[derive(Clone)]
pub struct PgOrdersService {
    db: Db,
    orders: PgOrdersRepository,
    products: PgProductsRepository,
    notifier: Arc<dyn OrderNotifier>,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, notifier: Arc<dyn OrderNotifier>) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            products: PgProductsRepository::new(),
            notifier,
        }
    }

    async fn persist(&self, order: &ValidatedOrder) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self
            .products
            .find_products(&mut tx, &order.product_ids())
            .await?;

        let priced = price_items(&order.items, &products)?;
        let reference = OrderReference::generate(&mut rand::thread_rng());

        let record = self
            .orders
            .create_order(
                &mut tx,
                NewOrder {
                    reference: &reference,
                    customer_name: &order.customer_name,
                    customer_email: order.customer_email.as_deref(),
                    customer_phone: order.customer_phone.as_deref(),
                    address: &order.address,
                    items: &priced.items,
                    total: priced.total,
                },
            )
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    fn dispatch_notifications(&self, order: OrderRecord) {
        let notifier = Arc::clone(&self.notifier);
        let span = info_span!("orders.notify", reference = %order.reference);

        tokio::spawn(
            async move {
                notifier.order_placed(&order).await;
            }
            .instrument(span),
        );
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, request: OrderRequest) -> Result<OrderRecord, OrdersServiceError> {
        let order = request.validate()?;

        let record = self.persist(&order).await?;

        info!(
            reference = %record.reference,
            total = %record.total,
            items = record.items.len(),
            "order placed"
        );

        self.dispatch_notifications(record.clone());

        Ok(record)
    }

    async fn get_order(
        &self,
        reference: OrderReference,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self.orders.get_order(&mut tx, &reference).await?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate, price and persist an order, then notify in the background.
    ///
    /// Product lookup and insert share one transaction; nothing is written when
    /// any product is unknown.
    async fn create_order(&self, request: OrderRequest) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve an order by its public reference.
    async fn get_order(&self, reference: OrderReference)
    -> Result<OrderRecord, OrdersServiceError>;
}
