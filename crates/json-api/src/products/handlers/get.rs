//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Get Product Handler
///
/// Returns a catalog product whether or not it is currently active.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError, models::ProductUuid,
    };

    use crate::test_helpers::{Mocks, make_product, service_as};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        service_as(
            None,
            Mocks {
                products,
                ..Mocks::default()
            },
            Router::with_path("products/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_product() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(product));

        let response: ProductResponse =
            TestClient::get(format!("http://example.com/products/{uuid}"))
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.sell_price, 1000);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_inactive_product_is_still_returned() -> TestResult {
        let uuid = ProductUuid::new();
        let mut product = make_product(uuid);

        product.is_active = false;

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .return_once(move |_| Ok(product));

        let mut res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let response: ProductResponse = res.take_json().await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert!(!response.is_active, "inactive flag should be reported");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/products/123")
            .send(&make_service(MockProductsService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
