//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{like_pattern, to_count, to_i32, to_i64, try_get_u8, try_get_u32, try_get_u64},
    domain::products::{
        data::{NewProduct, ProductFilter, ProductUpdate},
        models::{Product, ProductUuid},
    },
    pagination::PageRequest,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const TOGGLE_PRODUCT_STATUS_SQL: &str = include_str!("sql/toggle_product_status.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// Bind values shared by the list and count queries.
struct FilterParams {
    search: Option<String>,
    brand: Option<String>,
    min_price: Option<i64>,
    max_price: Option<i64>,
    min_rating: Option<i16>,
    is_active: Option<bool>,
}

impl FilterParams {
    fn new(filter: &ProductFilter) -> Result<Self, sqlx::Error> {
        Ok(Self {
            search: filter.search.as_deref().map(like_pattern),
            brand: filter.brand.as_deref().map(like_pattern),
            min_price: filter.min_price.map(to_i64).transpose()?,
            max_price: filter.max_price.map(to_i64).transpose()?,
            min_rating: filter.min_rating.map(i16::from),
            is_active: filter.is_active,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let params = FilterParams::new(filter)?;

        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .bind(params.search)
            .bind(params.brand)
            .bind(params.min_price)
            .bind(params.max_price)
            .bind(params.min_rating)
            .bind(params.is_active)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &ProductFilter,
    ) -> Result<u64, sqlx::Error> {
        let params = FilterParams::new(filter)?;

        let total: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(params.search)
            .bind(params.brand)
            .bind(params.min_price)
            .bind(params.max_price)
            .bind(params.min_rating)
            .bind(params.is_active)
            .fetch_one(&mut **tx)
            .await?;

        to_count(total)
    }

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

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: NewProduct,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(product.brand)
            .bind(product.name)
            .bind(product.image_path)
            .bind(product.description)
            .bind(to_i32(product.quantity)?)
            .bind(to_i64(product.cost_price)?)
            .bind(to_i64(product.sell_price)?)
            .bind(i16::from(product.rating))
            .bind(product.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.brand)
            .bind(update.name)
            .bind(update.image_path)
            .bind(update.description)
            .bind(to_i32(update.quantity)?)
            .bind(to_i64(update.cost_price)?)
            .bind(to_i64(update.sell_price)?)
            .bind(i16::from(update.rating))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn toggle_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(TOGGLE_PRODUCT_STATUS_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            brand: row.try_get("brand")?,
            name: row.try_get("product_name")?,
            image_path: row.try_get("product_image")?,
            description: row.try_get("description")?,
            quantity: try_get_u32(row, "quantity")?,
            cost_price: try_get_u64(row, "cost_price")?,
            sell_price: try_get_u64(row, "sell_price")?,
            rating: try_get_u8(row, "rating")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
