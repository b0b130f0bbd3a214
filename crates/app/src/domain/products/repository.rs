//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgConnection, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::products::{
    data::{NewProduct, ProductFilter},
    records::{ProductId, ProductRecord},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const FIND_PRODUCTS_SQL: &str = include_str!("sql/find_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        conn: &mut PgConnection,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let pagination = filter.pagination();

        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.category())
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(conn)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        conn: &mut PgConnection,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(conn)
            .await
    }

    /// Fetch every product whose id is in `products` with a single query.
    ///
    /// Unknown ids are simply absent from the result.
    pub(crate) async fn find_products(
        &self,
        conn: &mut PgConnection,
        products: &[ProductId],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let ids: Vec<i64> = products.iter().map(|id| id.into_i64()).collect();

        query_as::<Postgres, ProductRecord>(FIND_PRODUCTS_SQL)
            .bind(ids)
            .fetch_all(conn)
            .await
    }

    pub(crate) async fn count_products(&self, conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_PRODUCTS_SQL).fetch_one(conn).await
    }

    pub(crate) async fn create_product(
        &self,
        conn: &mut PgConnection,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.original_price)
            .bind(&product.category)
            .bind(&product.image)
            .bind(product.stock)
            .fetch_one(conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            original_price: row.try_get("original_price")?,
            category: row.try_get("category")?,
            image: row.try_get("image")?,
            stock: row.try_get("stock")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
