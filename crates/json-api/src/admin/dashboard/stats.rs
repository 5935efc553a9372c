//! Dashboard Stats Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;

use storefront_app::domain::dashboard::{DashboardServiceError, DashboardStats};

use crate::{extensions::*, state::State};

/// Dashboard Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardStatsResponse {
    pub total_products: u64,
    pub active_products: u64,
    pub total_customers: u64,
    pub active_customers: u64,
    pub total_staff: u64,
    pub active_staff: u64,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_products: stats.total_products,
            active_products: stats.active_products,
            total_customers: stats.total_customers,
            active_customers: stats.active_customers,
            total_staff: stats.total_staff,
            active_staff: stats.active_staff,
        }
    }
}

/// Dashboard Stats Handler
#[endpoint(
    tags("admin"),
    summary = "Dashboard Stats",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Headline counts"),
        (status_code = StatusCode::FORBIDDEN, description = "Not a staff account"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<DashboardStatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let stats = state.app.dashboard.stats().await.map_err(|error| match error {
        DashboardServiceError::Sql(source) => {
            error!("dashboard storage failure: {source}");

            StatusError::internal_server_error()
        }
    })?;

    Ok(Json(stats.into()))
}
