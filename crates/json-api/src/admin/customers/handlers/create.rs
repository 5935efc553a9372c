//! Create Customer Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    admin::customers::{
        errors::into_status_error,
        models::{CreateCustomerRequest, CustomerResponse},
    },
    extensions::*,
    state::State,
};

/// Create Customer Handler
#[endpoint(
    tags("admin"),
    summary = "Create Customer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_or_403()?;

    let customer = state
        .app
        .customers
        .create_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/admin/customers/{}", customer.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(staff_uuid = %staff, customer_uuid = %customer.uuid, "staff created customer");

    Ok(Json(customer.into()))
}
