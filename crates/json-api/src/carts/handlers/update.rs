//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
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

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New number of units on the line
    #[salvo(schema(value_type = i64))]
    pub quantity: Number,
}

/// Update Cart Item Handler
///
/// Replaces the quantity of one of the caller's cart lines.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart line updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart line not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.update_item",
    skip(line, json, depot),
    fields(
        customer_uuid = tracing::field::Empty,
        line_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    line: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartLineResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_403()?;
    let line = line.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));
    span.record("line_uuid", tracing::field::display(line));
    span.record("quantity", tracing::field::display(&request.quantity));

    let quantity = whole_quantity(&request.quantity)?;

    let line = state
        .app
        .carts
        .update_item(customer, line.into(), quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(line.into()))
}
