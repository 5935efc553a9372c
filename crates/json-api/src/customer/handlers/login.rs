//! Customer Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::auth::{AccountKind, TokenOwner};

use crate::{
    admin::customers,
    auth::{self, models::LoginRequest},
    customer::models::CustomerSessionResponse,
    extensions::*,
    state::State,
};

/// Customer Login Handler
///
/// Each successful login issues a fresh token.
#[endpoint(
    tags("customer"),
    summary = "Customer Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
        (status_code = StatusCode::FORBIDDEN, description = "Account deactivated"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Missing email or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request.validate()?;

    let issued = state
        .app
        .auth
        .login(AccountKind::Customer, request.email.trim(), &request.password)
        .await
        .map_err(auth::errors::into_status_error)?;

    let TokenOwner::Customer(uuid) = issued.metadata.owner else {
        tracing::error!(owner = ?issued.metadata.owner, "customer login issued a staff token");

        return Err(StatusError::internal_server_error());
    };

    let customer = state
        .app
        .customers
        .get_customer(uuid)
        .await
        .map_err(customers::errors::into_status_error)?;

    tracing::info!(customer_uuid = %uuid, "customer logged in");

    Ok(Json(CustomerSessionResponse {
        customer: customer.into(),
        token: issued.token,
    }))
}
