//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn validation_failures_are_bad_requests() {
        for error in [
            ProductsServiceError::InvalidReference,
            ProductsServiceError::MissingRequiredData,
            ProductsServiceError::InvalidData,
        ] {
            assert_eq!(into_status_error(error).code, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn duplicates_conflict() {
        assert_eq!(
            into_status_error(ProductsServiceError::AlreadyExists).code,
            StatusCode::CONFLICT
        );
    }
}
