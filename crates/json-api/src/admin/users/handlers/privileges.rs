//! Update Staff Privileges Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use storefront_app::domain::staff::Capability;

use crate::{
    admin::users::{
        errors::into_status_error,
        models::{PrivilegesRequest, StaffResponse},
    },
    extensions::*,
    state::State,
};

/// Update Staff Privileges Handler
///
/// Replaces the catalog privilege flags of a non-admin staff user.
#[endpoint(
    tags("admin"),
    summary = "Update Staff Privileges",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Privileges replaced"),
        (status_code = StatusCode::NOT_FOUND, description = "Staff user not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Target is an admin"),
        (status_code = StatusCode::FORBIDDEN, description = "Missing manage_staff capability"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<PrivilegesRequest>,
    depot: &mut Depot,
) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let actor = depot.capability_or_403(Capability::ManageStaff)?;

    let user = state
        .app
        .staff
        .update_privileges(user.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(actor_uuid = %actor, staff_uuid = %user.uuid, "updated staff privileges");

    Ok(Json(user.into()))
}
