//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

use crate::observability::record_cart_rejection;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => {
            StatusError::not_found().brief("Cart line or product not found")
        }
        CartsServiceError::ProductUnavailable => {
            record_cart_rejection("product_unavailable");

            StatusError::conflict().brief("Product is not available")
        }
        CartsServiceError::InsufficientStock {
            requested,
            available,
        } => {
            record_cart_rejection("insufficient_stock");

            StatusError::conflict().brief(format!(
                "Insufficient stock: requested {requested}, available {available}"
            ))
        }
        CartsServiceError::InvalidQuantity => invalid_quantity(),
        CartsServiceError::Sql(source) => {
            error!("cart storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn invalid_quantity() -> StatusError {
    StatusError::unprocessable_entity().brief("Quantity must be a positive whole number")
}
