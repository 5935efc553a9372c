//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.remove_item",
    skip(line, depot),
    fields(customer_uuid = tracing::field::Empty, line_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    line: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_403()?;
    let line = line.into_inner();

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));
    span.record("line_uuid", tracing::field::display(line));

    state
        .app
        .carts
        .remove_item(customer, line.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use storefront_app::domain::carts::{CartsServiceError, MockCartsService, models::CartLineUuid};

    use crate::test_helpers::{
        Mocks, SpanNames, TEST_CUSTOMER_UUID, customer_principal, service_as,
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        service_as(
            Some(customer_principal()),
            Mocks {
                carts,
                ..Mocks::default()
            },
            Router::with_path("cart/{line}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_remove_item_returns_204() -> TestResult {
        let uuid = CartLineUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .withf(move |customer, l| *customer == TEST_CUSTOMER_UUID && *l == uuid)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/cart/{uuid}"))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/cart/{}", CartLineUuid::new()))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::delete("http://example.com/cart/123")
            .send(&make_service(MockCartsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_item_runs_in_its_own_span() -> TestResult {
        let (spans, _guard) = SpanNames::capture();

        let mut carts = MockCartsService::new();

        carts.expect_remove_item().once().return_once(|_, _| Ok(()));

        let res = TestClient::delete(format!("http://example.com/cart/{}", CartLineUuid::new()))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert!(spans.contains("cart.remove_item"), "expected cart.remove_item span");

        Ok(())
    }
}
