//! Get Staff User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::staff::Capability;

use crate::{
    admin::users::{errors::into_status_error, models::StaffResponse},
    extensions::*,
    state::State,
};

/// Get Staff User Handler
#[endpoint(
    tags("admin"),
    summary = "Get Staff User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Staff user found"),
        (status_code = StatusCode::NOT_FOUND, description = "Staff user not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Missing manage_staff capability"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.capability_or_403(Capability::ManageStaff)?;

    let user = state
        .app
        .staff
        .get_staff(user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
