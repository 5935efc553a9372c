//! Admin Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::{domain::products::data::ProductFilter, pagination::PageRequest};

use crate::{
    admin::products::models::AdminProductResponse,
    extensions::*,
    pagination::{PRODUCTS_PER_PAGE, PageMeta},
    products::errors::into_status_error,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminProductsResponse {
    pub products: Vec<AdminProductResponse>,
    pub meta: PageMeta,
}

/// Admin Product Index Handler
///
/// Lists active and inactive products, newest first.
#[endpoint(
    tags("admin"),
    summary = "List Products (admin)",
    security(("bearer_auth" = []))
)]
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
) -> Result<Json<AdminProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let filter = ProductFilter {
        search: search.into_inner(),
        brand: brand.into_inner(),
        min_price: min_price.into_inner(),
        max_price: max_price.into_inner(),
        min_rating: min_rating.into_inner(),
        is_active: is_active.into_inner(),
    };

    let page = PageRequest::new(page.into_inner(), per_page.into_inner(), PRODUCTS_PER_PAGE);

    let products = state
        .app
        .products
        .list_products(filter, page)
        .await
        .map_err(into_status_error)?;

    let meta = PageMeta::from(&products);

    Ok(Json(AdminProductsResponse {
        products: products.items.into_iter().map(Into::into).collect(),
        meta,
    }))
}
