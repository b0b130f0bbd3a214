//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as, types::Json};

use super::{
    records::{LineItem, OrderId, OrderRecord},
    reference::OrderReference,
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");

/// Row to insert; everything except the generated columns.
#[derive(Debug, Clone)]
pub(crate) struct NewOrder<'a> {
    pub reference: &'a OrderReference,
    pub customer_name: &'a str,
    pub customer_email: Option<&'a str>,
    pub customer_phone: Option<&'a str>,
    pub address: &'a str,
    pub items: &'a [LineItem],
    pub total: Decimal,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        conn: &mut PgConnection,
        order: NewOrder<'_>,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.reference.as_str())
            .bind(order.customer_name)
            .bind(order.customer_email)
            .bind(order.customer_phone)
            .bind(order.address)
            .bind(Json(order.items))
            .bind(order.total)
            .fetch_one(conn)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        conn: &mut PgConnection,
        reference: &OrderReference,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(reference.as_str())
            .fetch_one(conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: OrderId::from_i64(row.try_get("id")?),
            reference: OrderReference::from_string(row.try_get("reference")?),
            customer_name: row.try_get("customer_name")?,
            customer_email: row.try_get("customer_email")?,
            customer_phone: row.try_get("customer_phone")?,
            address: row.try_get("address")?,
            items: row.try_get::<Json<Vec<LineItem>>, _>("items")?.0,
            total: row.try_get("total")?,
            status: row.try_get("status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
