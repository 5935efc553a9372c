//! Register Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    auth::errors::into_status_error,
    customer::models::{CustomerSessionResponse, RegisterRequest},
    extensions::*,
    state::State,
};

/// Register Handler
///
/// Creates a customer account and signs it in.
#[endpoint(
    tags("customer"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Customer registered"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid account details"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let (customer, password) = json.into_inner().into_registration()?;

    let registration = state
        .app
        .auth
        .register_customer(customer, password)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, "/customer/profile", true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(customer_uuid = %registration.customer.uuid, "customer registered");

    Ok(Json(CustomerSessionResponse {
        customer: registration.customer.into(),
        token: registration.token.token,
    }))
}
