//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartLineResponse, whole_quantity},
    },
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// The product to add
    pub product_uuid: Uuid,

    /// Units to add; must be a positive whole number
    #[salvo(schema(value_type = i64))]
    pub quantity: Number,
}

/// Add Cart Item Handler
///
/// Adds units of a product, merging with the existing line for the same product.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart line created or increased"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Unavailable or out of stock"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.add_item",
    skip(json, depot, res),
    fields(
        customer_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartLineResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_403()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));
    span.record("product_uuid", tracing::field::display(request.product_uuid));
    span.record("quantity", tracing::field::display(&request.quantity));

    let quantity = whole_quantity(&request.quantity)?;

    let line = state
        .app
        .carts
        .add_item(customer, request.product_uuid.into(), quantity)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/{}", line.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(line_uuid = %line.uuid, line_quantity = line.quantity, "added cart item");

    Ok(Json(line.into()))
}
