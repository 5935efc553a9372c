//! Dashboard service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardServiceError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
