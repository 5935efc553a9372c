//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::{to_i32, try_get_u32},
    domain::{
        carts::models::{CartLine, CartLineUuid},
        customers::models::CustomerUuid,
        products::models::{Product, ProductUuid},
    },
};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const UPSERT_LINE_SQL: &str = include_str!("sql/upsert_line.sql");
const FIND_LINE_QUANTITY_SQL: &str = include_str!("sql/find_line_quantity.sql");
const GET_LINE_SQL: &str = include_str!("sql/get_line.sql");
const LIST_LINES_SQL: &str = include_str!("sql/list_lines.sql");
const UPDATE_LINE_QUANTITY_SQL: &str = include_str!("sql/update_line_quantity.sql");
const DELETE_LINE_SQL: &str = include_str!("sql/delete_line.sql");
const CLEAR_LINES_SQL: &str = include_str!("sql/clear_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Current catalog state of a product, read inside the caller's transaction.
    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert a line or add to the existing one for the same product, in one statement.
    ///
    /// Returns `None` when the resulting quantity would exceed `stock`; the existing line is
    /// left as it was.
    pub(crate) async fn upsert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        product: ProductUuid,
        quantity: u32,
        stock: u32,
    ) -> Result<Option<CartLineUuid>, sqlx::Error> {
        let uuid: Option<Uuid> = query_scalar(UPSERT_LINE_SQL)
            .bind(CartLineUuid::new().into_uuid())
            .bind(customer.into_uuid())
            .bind(product.into_uuid())
            .bind(to_i32(quantity)?)
            .bind(i64::from(stock))
            .fetch_optional(&mut **tx)
            .await?;

        Ok(uuid.map(CartLineUuid::from_uuid))
    }

    /// Quantity already in the customer's cart for a product; zero when absent.
    pub(crate) async fn find_line_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<u32, sqlx::Error> {
        let quantity: Option<i32> = query_scalar(FIND_LINE_QUANTITY_SQL)
            .bind(customer.into_uuid())
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        quantity.map_or(Ok(0), |value| {
            u32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
                index: "quantity".to_string(),
                source: Box::new(e),
            })
        })
    }

    pub(crate) async fn get_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        line: CartLineUuid,
    ) -> Result<CartLine, sqlx::Error> {
        query_as::<Postgres, CartLine>(GET_LINE_SQL)
            .bind(line.into_uuid())
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<CartLine>, sqlx::Error> {
        query_as::<Postgres, CartLine>(LIST_LINES_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_line_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        line: CartLineUuid,
        quantity: u32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_LINE_QUANTITY_SQL)
            .bind(line.into_uuid())
            .bind(customer.into_uuid())
            .bind(to_i32(quantity)?)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        line: CartLineUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINE_SQL)
            .bind(line.into_uuid())
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn clear_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_LINES_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartLineUuid::from_uuid(row.try_get("line_uuid")?),
            customer: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            product: Product::from_row(row)?,
            quantity: try_get_u32(row, "line_quantity")?,
            created_at: row
                .try_get::<SqlxTimestamp, _>("line_created_at")?
                .to_jiff(),
            updated_at: row
                .try_get::<SqlxTimestamp, _>("line_updated_at")?
                .to_jiff(),
        })
    }
}
