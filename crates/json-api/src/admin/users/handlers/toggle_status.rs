//! Toggle Staff User Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::staff::Capability;

use crate::{
    admin::users::{errors::into_status_error, models::StaffResponse},
    extensions::*,
    state::State,
};

/// Toggle Staff User Status Handler
///
/// Deactivated staff users can no longer authenticate. Staff users cannot deactivate
/// their own account.
#[endpoint(
    tags("admin"),
    summary = "Toggle Staff User Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Staff user status flipped"),
        (status_code = StatusCode::NOT_FOUND, description = "Staff user not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Own account or not permitted"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let actor = depot.capability_or_403(Capability::ManageStaff)?;

    let user = state
        .app
        .staff
        .toggle_status(actor, user.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        actor_uuid = %actor,
        staff_uuid = %user.uuid,
        is_active = user.is_active,
        "toggled staff user status"
    );

    Ok(Json(user.into()))
}
