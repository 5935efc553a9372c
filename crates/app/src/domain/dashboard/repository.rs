//! Dashboard Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{database::try_get_u64, domain::dashboard::models::DashboardStats};

const STATS_SQL: &str = include_str!("sql/stats.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDashboardRepository;

impl PgDashboardRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn stats(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<DashboardStats, sqlx::Error> {
        query_as::<Postgres, DashboardStats>(STATS_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DashboardStats {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            total_products: try_get_u64(row, "total_products")?,
            active_products: try_get_u64(row, "active_products")?,
            total_customers: try_get_u64(row, "total_customers")?,
            active_customers: try_get_u64(row, "active_customers")?,
            total_staff: try_get_u64(row, "total_staff")?,
            active_staff: try_get_u64(row, "active_staff")?,
        })
    }
}
