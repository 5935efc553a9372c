//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartClearedResponse {
    /// Number of lines removed
    pub removed: u64,
}

/// Clear Cart Handler
///
/// Removes every line from the caller's cart. Clearing an empty cart succeeds.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    name = "cart.clear",
    skip(depot),
    fields(customer_uuid = tracing::field::Empty, removed = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartClearedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_403()?;

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer));

    let removed = state
        .app
        .carts
        .clear_cart(customer)
        .await
        .map_err(into_status_error)?;

    span.record("removed", removed);

    Ok(Json(CartClearedResponse { removed }))
}
