//! Update Customer Profile Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    admin::customers::{errors::into_status_error, models::CustomerResponse},
    customer::models::UpdateProfileRequest,
    extensions::*,
    state::State,
};

/// Update Customer Profile Handler
///
/// Replaces the caller's name, email and contact number.
#[endpoint(
    tags("customer"),
    summary = "Update Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::FORBIDDEN, description = "A customer account is required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_403()?;

    let customer = state
        .app
        .customers
        .update_profile(customer, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(customer_uuid = %customer.uuid, "customer updated profile");

    Ok(Json(customer.into()))
}
