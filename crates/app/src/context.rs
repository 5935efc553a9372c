//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService},
    database::{self, Db, PoolSettings},
    domain::{
        carts::{CartsService, PgCartsService},
        customers::{CustomersService, PgCustomersService},
        dashboard::{DashboardService, PgDashboardService},
        products::{PgProductsService, ProductsService},
        staff::{PgStaffService, StaffService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub customers: Arc<dyn CustomersService>,
    pub staff: Arc<dyn StaffService>,
    pub dashboard: Arc<dyn DashboardService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, pool: PoolSettings) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, pool)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool.clone());

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            staff: Arc::new(PgStaffService::new(db.clone())),
            dashboard: Arc::new(PgDashboardService::new(db)),
            auth: Arc::new(PgAuthService::new(pool)),
        })
    }
}
