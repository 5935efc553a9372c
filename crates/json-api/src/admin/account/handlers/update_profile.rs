//! Update Staff Profile Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    admin::{
        account::models::UpdateStaffProfileRequest,
        users::{errors::into_status_error, models::StaffResponse},
    },
    extensions::*,
    state::State,
};

/// Update Staff Profile Handler
///
/// Any staff user may edit their own contact details; the role is left unchanged.
#[endpoint(
    tags("admin"),
    summary = "Update Staff Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::FORBIDDEN, description = "A staff account is required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateStaffProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_or_403()?;

    let user = state
        .app
        .staff
        .update_profile(staff, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(staff_uuid = %user.uuid, "staff updated profile");

    Ok(Json(user.into()))
}
