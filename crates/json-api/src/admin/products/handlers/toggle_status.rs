//! Toggle Product Status Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use storefront_app::domain::staff::Capability;

use crate::{
    admin::products::models::AdminProductResponse, extensions::*,
    products::errors::into_status_error, state::State,
};

/// Toggle Product Status Handler
///
/// Hides an active product from the storefront or publishes an inactive one.
#[endpoint(
    tags("admin"),
    summary = "Toggle Product Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product status flipped"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Missing update_product capability"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<AdminProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let staff = depot.capability_or_403(Capability::UpdateProduct)?;

    let product = state
        .app
        .products
        .toggle_status(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        staff_uuid = %staff,
        product_uuid = %product.uuid,
        is_active = product.is_active,
        "staff toggled product status"
    );

    Ok(Json(product.into()))
}
