//! Customer Profile Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    admin::customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
    state::State,
};

/// Customer Profile Handler
#[endpoint(
    tags("customer"),
    summary = "Get Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile"),
        (status_code = StatusCode::FORBIDDEN, description = "A customer account is required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CustomerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_403()?;

    let customer = state
        .app
        .customers
        .get_customer(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::customers::MockCustomersService;

    use crate::test_helpers::{
        Mocks, TEST_CUSTOMER_UUID, customer_principal, make_customer, service_as, staff_principal,
    };

    use super::*;

    #[tokio::test]
    async fn test_profile_returns_the_callers_account() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_get_customer()
            .once()
            .withf(|uuid| *uuid == TEST_CUSTOMER_UUID)
            .return_once(|uuid| Ok(make_customer(uuid)));

        let service = service_as(
            Some(customer_principal()),
            Mocks {
                customers,
                ..Mocks::default()
            },
            Router::with_path("customer/profile").get(handler),
        );

        let mut res = TestClient::get("http://example.com/customer/profile")
            .send(&service)
            .await;

        let body: CustomerResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, TEST_CUSTOMER_UUID.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_staff_have_no_customer_profile() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_get_customer().never();

        let service = service_as(
            Some(staff_principal(&[])),
            Mocks {
                customers,
                ..Mocks::default()
            },
            Router::with_path("customer/profile").get(handler),
        );

        let res = TestClient::get("http://example.com/customer/profile")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
