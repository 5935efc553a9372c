//! Delete Staff User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::staff::Capability;

use crate::{admin::users::errors::into_status_error, extensions::*, state::State};

/// Delete Staff User Handler
///
/// Staff users cannot delete their own account.
#[endpoint(
    tags("admin"),
    summary = "Delete Staff User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Staff user deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Staff user not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Own account or not permitted"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let actor = depot.capability_or_403(Capability::ManageStaff)?;
    let user = user.into_inner();

    state
        .app
        .staff
        .delete_staff(actor, user.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(actor_uuid = %actor, staff_uuid = %user, "deleted staff user");

    Ok(StatusCode::NO_CONTENT)
}
