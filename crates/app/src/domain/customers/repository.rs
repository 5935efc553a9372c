//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{like_pattern, to_count},
    domain::customers::{
        data::{CustomerFilter, CustomerUpdate, NewCustomer},
        models::{Customer, CustomerUuid},
    },
    pagination::PageRequest,
};

const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");
const COUNT_CUSTOMERS_SQL: &str = include_str!("sql/count_customers.sql");
const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");
const UPDATE_CUSTOMER_SQL: &str = include_str!("sql/update_customer.sql");
const TOGGLE_CUSTOMER_STATUS_SQL: &str = include_str!("sql/toggle_customer_status.sql");
const DELETE_CUSTOMER_SQL: &str = include_str!("sql/delete_customer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_customers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &CustomerFilter,
        page: PageRequest,
    ) -> Result<Vec<Customer>, sqlx::Error> {
        query_as::<Postgres, Customer>(LIST_CUSTOMERS_SQL)
            .bind(filter.search.as_deref().map(like_pattern))
            .bind(filter.is_active)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_customers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &CustomerFilter,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_CUSTOMERS_SQL)
            .bind(filter.search.as_deref().map(like_pattern))
            .bind(filter.is_active)
            .fetch_one(&mut **tx)
            .await?;

        to_count(total)
    }

    pub(crate) async fn get_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Customer, sqlx::Error> {
        query_as::<Postgres, Customer>(GET_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: NewCustomer,
    ) -> Result<Customer, sqlx::Error> {
        query_as::<Postgres, Customer>(CREATE_CUSTOMER_SQL)
            .bind(customer.uuid.into_uuid())
            .bind(customer.first_name)
            .bind(customer.last_name)
            .bind(customer.email)
            .bind(customer.contact)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
        update: CustomerUpdate,
    ) -> Result<Customer, sqlx::Error> {
        query_as::<Postgres, Customer>(UPDATE_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .bind(update.first_name)
            .bind(update.last_name)
            .bind(update.email)
            .bind(update.contact)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn toggle_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Customer, sqlx::Error> {
        query_as::<Postgres, Customer>(TOGGLE_CUSTOMER_STATUS_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Customer {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CustomerUuid::from_uuid(row.try_get("uuid")?),
            first_name: row.try_get("fname")?,
            last_name: row.try_get("lname")?,
            email: row.try_get("email")?,
            contact: row.try_get("contact")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
