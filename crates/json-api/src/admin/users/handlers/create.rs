//! Create Staff User Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use storefront_app::{auth::TokenOwner, domain::staff::Capability};

use crate::{
    admin::users::{
        errors::into_status_error,
        models::{CreateStaffRequest, StaffResponse},
    },
    auth,
    extensions::*,
    state::State,
};

/// Create Staff User Handler
///
/// New accounts start with every privilege flag off. A `password`, when given, is set
/// right after the account is created.
#[endpoint(
    tags("admin"),
    summary = "Create Staff User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Staff user created"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Missing manage_staff capability"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Password too short"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateStaffRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let actor = depot.capability_or_403(Capability::ManageStaff)?;
    let (new_staff, password) = json.into_inner().into_new_staff()?;

    let user = state
        .app
        .staff
        .create_staff(new_staff)
        .await
        .map_err(into_status_error)?;

    if let Some(password) = password {
        state
            .app
            .auth
            .set_password(TokenOwner::Staff(user.uuid), password)
            .await
            .map_err(auth::errors::into_status_error)?;
    }

    res.add_header(LOCATION, format!("/admin/users/{}", user.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(
        actor_uuid = %actor,
        staff_uuid = %user.uuid,
        role = %user.role,
        "created staff user"
    );

    Ok(Json(user.into()))
}
