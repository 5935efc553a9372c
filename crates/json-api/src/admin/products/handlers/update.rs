//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use storefront_app::domain::staff::Capability;

use crate::{
    admin::products::models::{AdminProductResponse, UpdateProductRequest},
    extensions::*,
    products::errors::into_status_error,
    state::State,
};

/// Update Product Handler
///
/// Replaces every editable field of the product. Existing cart lines keep their
/// quantities and are repriced on the next cart read.
#[endpoint(
    tags("admin"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Missing update_product capability"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<AdminProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.capability_or_403(Capability::UpdateProduct)?;

    let product = state
        .app
        .products
        .update_product(product.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(staff_uuid = %staff, product_uuid = %product.uuid, "staff updated product");

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::{
        auth::Principal,
        domain::products::{MockProductsService, ProductsServiceError, models::ProductUuid},
    };

    use crate::test_helpers::{Mocks, make_product, service_as, staff_principal};

    use super::*;

    fn make_service(principal: Principal, products: MockProductsService) -> Service {
        service_as(
            Some(principal),
            Mocks {
                products,
                ..Mocks::default()
            },
            Router::with_path("admin/products/{product}").put(handler),
        )
    }

    fn payload() -> serde_json::Value {
        json!({
            "brand": "Acme",
            "name": "Armchair",
            "quantity": 3,
            "cost_price": 5000,
            "sell_price": 9900,
            "rating": 5
        })
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(move |product, update| {
                *product == uuid
                    && update.name == "Armchair"
                    && update.sell_price == 9900
                    && update.image_path.is_none()
            })
            .return_once(move |_, update| {
                let mut product = make_product(uuid);

                product.name = update.name;
                product.sell_price = update.sell_price;

                Ok(product)
            });

        let mut res = TestClient::put(format!("http://example.com/admin/products/{uuid}"))
            .json(&payload())
            .send(&make_service(staff_principal(&[Capability::UpdateProduct]), products))
            .await;

        let body: AdminProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Armchair");
        assert_eq!(body.sell_price, 9900);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_not_found_returns_404() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/admin/products/{}", Uuid::now_v7()))
            .json(&payload())
            .send(&make_service(staff_principal(&[Capability::UpdateProduct]), products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_with_only_add_capability_returns_403() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_update_product().never();

        let res = TestClient::put(format!("http://example.com/admin/products/{}", Uuid::now_v7()))
            .json(&payload())
            .send(&make_service(staff_principal(&[Capability::AddProduct]), products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
