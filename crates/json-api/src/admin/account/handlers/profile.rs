//! Staff Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    admin::users::{errors::into_status_error, models::StaffResponse},
    extensions::*,
    state::State,
};

/// Staff Profile Handler
#[endpoint(
    tags("admin"),
    summary = "Get Staff Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile"),
        (status_code = StatusCode::FORBIDDEN, description = "A staff account is required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_or_403()?;

    let user = state
        .app
        .staff
        .get_staff(staff)
        .await
        .map_err(into_status_error)?;

    Ok(Json(user.into()))
}
