//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::{domain::products::data::ProductFilter, pagination::PageRequest};

use crate::{
    extensions::*,
    pagination::{PRODUCTS_PER_PAGE, PageMeta},
    products::{errors::into_status_error, models::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The products on this page
    pub products: Vec<ProductResponse>,

    pub meta: PageMeta,
}

/// Product Index Handler
///
/// Lists catalog products, newest first. Only active products are shown unless
/// `is_active` is given.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    search: QueryParam<String, false>,
    brand: QueryParam<String, false>,
    min_price: QueryParam<u64, false>,
    max_price: QueryParam<u64, false>,
    min_rating: QueryParam<u8, false>,
    is_active: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        search: search.into_inner(),
        brand: brand.into_inner(),
        min_price: min_price.into_inner(),
        max_price: max_price.into_inner(),
        min_rating: min_rating.into_inner(),
        is_active: is_active.into_inner(),
    }
    .storefront();

    let page = PageRequest::new(page.into_inner(), per_page.into_inner(), PRODUCTS_PER_PAGE);

    let products = state
        .app
        .products
        .list_products(filter, page)
        .await
        .map_err(into_status_error)?;

    let meta = PageMeta::from(&products);

    Ok(Json(ProductsResponse {
        products: products.items.into_iter().map(Into::into).collect(),
        meta,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::{
        domain::products::{MockProductsService, ProductsServiceError, models::ProductUuid},
        pagination::Page,
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
            Router::with_path("products").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_defaults_to_active_products_first_page() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter, page| {
                *filter
                    == ProductFilter {
                        is_active: Some(true),
                        ..ProductFilter::default()
                    }
                    && *page == PageRequest::new(None, None, PRODUCTS_PER_PAGE)
            })
            .return_once(|_, page| Ok(Page::new(vec![], 0, page)));

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert!(response.products.is_empty());
        assert_eq!(response.meta.last_page, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filters() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .withf(|filter, page| {
                *filter
                    == ProductFilter {
                        search: Some("mug".to_string()),
                        brand: None,
                        min_price: Some(100),
                        max_price: Some(900),
                        min_rating: Some(3),
                        is_active: Some(false),
                    }
                    && page.page == 2
                    && page.per_page == 5
            })
            .return_once(|_, page| Ok(Page::new(vec![], 0, page)));

        let res = TestClient::get(
            "http://example.com/products?search=mug&min_price=100&max_price=900&min_rating=3&is_active=false&page=2&per_page=5",
        )
        .send(&make_service(products))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_products_with_meta() -> TestResult {
        let uuid_a = ProductUuid::new();
        let uuid_b = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(move |_, page| {
                Ok(Page::new(
                    vec![make_product(uuid_a), make_product(uuid_b)],
                    14,
                    page,
                ))
            });

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 2, "expected two products");
        assert_eq!(
            response.products.first().map(|p| p.uuid),
            Some(uuid_a.into_uuid())
        );
        assert_eq!(response.meta.total, 14);
        assert_eq!(response.meta.last_page, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
