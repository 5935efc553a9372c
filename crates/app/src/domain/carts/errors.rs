//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The product or cart line does not exist, or belongs to another customer.
    #[error("not found")]
    NotFound,

    #[error("product is not available")]
    ProductUnavailable,

    /// `available` is the largest quantity this request could have asked for.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("quantity must be a positive whole number")]
    InvalidQuantity,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if matches!(error, Error::Encode(_)) {
            return Self::InvalidQuantity;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::CheckViolation) => Self::InvalidQuantity,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        assert!(matches!(
            CartsServiceError::from(Error::RowNotFound),
            CartsServiceError::NotFound
        ));
    }

    #[test]
    fn pool_errors_are_storage_errors() {
        assert!(matches!(
            CartsServiceError::from(Error::PoolTimedOut),
            CartsServiceError::Sql(_)
        ));
    }

    #[test]
    fn insufficient_stock_message_names_both_quantities() {
        let error = CartsServiceError::InsufficientStock {
            requested: 6,
            available: 5,
        };

        assert_eq!(
            error.to_string(),
            "insufficient stock: requested 6, available 5"
        );
    }
}
