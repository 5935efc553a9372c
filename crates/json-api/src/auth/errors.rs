//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::auth::{AuthServiceError, PasswordError};

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Invalid email or password")
        }
        AuthServiceError::NotFound => StatusError::unauthorized().brief("Invalid API token"),
        AuthServiceError::AccountDisabled => {
            StatusError::forbidden().brief("This account has been deactivated")
        }
        AuthServiceError::AlreadyExists => {
            StatusError::conflict().brief("An account with this email already exists")
        }
        AuthServiceError::InvalidReference => StatusError::not_found().brief("Account not found"),
        AuthServiceError::MissingRequiredData | AuthServiceError::InvalidData => {
            StatusError::unprocessable_entity().brief("Invalid account details")
        }
        AuthServiceError::Password(error @ PasswordError::TooShort) => {
            StatusError::unprocessable_entity().brief(error.to_string())
        }
        AuthServiceError::Password(source @ PasswordError::Hash(_)) => {
            error!("password hashing failure: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Sql(source) => {
            error!("auth storage failure: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Token(source) => {
            error!("api token failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
