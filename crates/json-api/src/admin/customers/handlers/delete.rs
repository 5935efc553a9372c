//! Delete Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{admin::customers::errors::into_status_error, extensions::*, state::State};

/// Delete Customer Handler
///
/// Removes the customer together with their cart and API tokens.
#[endpoint(
    tags("admin"),
    summary = "Delete Customer",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Customer deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_or_403()?;
    let customer = customer.into_inner();

    state
        .app
        .customers
        .delete_customer(customer.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(staff_uuid = %staff, customer_uuid = %customer, "staff deleted customer");

    Ok(StatusCode::NO_CONTENT)
}
