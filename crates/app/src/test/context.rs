//! Test context for service-level integration tests.

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        carts::PgCartsService, customers::PgCustomersService, dashboard::PgDashboardService,
        products::PgProductsService, staff::PgStaffService,
    },
};

use super::db::TestDb;

/// Every service wired to a fresh, migrated database.
pub(crate) struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
    pub carts: PgCartsService,
    pub customers: PgCustomersService,
    pub staff: PgStaffService,
    pub dashboard: PgDashboardService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db.clone()),
            customers: PgCustomersService::new(db.clone()),
            staff: PgStaffService::new(db.clone()),
            dashboard: PgDashboardService::new(db),
            auth: PgAuthService::new(test_db.pool().clone()),
            db: test_db,
        }
    }
}
