//! Dashboard service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::dashboard::{
        errors::DashboardServiceError, models::DashboardStats,
        repository::PgDashboardRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgDashboardService {
    db: Db,
    repository: PgDashboardRepository,
}

impl PgDashboardService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDashboardRepository::new(),
        }
    }
}

#[async_trait]
impl DashboardService for PgDashboardService {
    async fn stats(&self) -> Result<DashboardStats, DashboardServiceError> {
        let mut tx = self.db.begin().await?;

        let stats = self.repository.stats(&mut tx).await?;

        tx.commit().await?;

        Ok(stats)
    }
}

#[automock]
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Product, customer and staff counts, read from one snapshot.
    async fn stats(&self) -> Result<DashboardStats, DashboardServiceError>;
}
