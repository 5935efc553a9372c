//! Toggle Customer Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    admin::customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
    state::State,
};

/// Toggle Customer Status Handler
///
/// Deactivated customers can no longer authenticate.
#[endpoint(
    tags("admin"),
    summary = "Toggle Customer Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Customer status flipped"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.staff_or_403()?;

    let customer = state
        .app
        .customers
        .toggle_status(customer.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        staff_uuid = %staff,
        customer_uuid = %customer.uuid,
        is_active = customer.is_active,
        "staff toggled customer status"
    );

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::customers::{MockCustomersService, models::CustomerUuid};

    use crate::test_helpers::{Mocks, make_customer, service_as, staff_principal};

    use super::*;

    #[tokio::test]
    async fn test_toggle_status_returns_flipped_customer() -> TestResult {
        let uuid = CustomerUuid::new();

        let mut customers = MockCustomersService::new();

        customers
            .expect_toggle_status()
            .once()
            .withf(move |customer| *customer == uuid)
            .return_once(move |_| {
                let mut customer = make_customer(uuid);

                customer.is_active = false;

                Ok(customer)
            });

        let service = service_as(
            Some(staff_principal(&[])),
            Mocks {
                customers,
                ..Mocks::default()
            },
            Router::with_path("admin/customers/{customer}/toggle-status").patch(handler),
        );

        let body: CustomerResponse =
            TestClient::patch(format!("http://example.com/admin/customers/{uuid}/toggle-status"))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert!(!body.is_active);

        Ok(())
    }
}
