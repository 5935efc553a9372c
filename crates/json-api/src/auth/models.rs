//! Auth Models

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

/// Login Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Blank fields are rejected before any lookup.
    pub(crate) fn validate(&self) -> Result<(), StatusError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(
                StatusError::unprocessable_entity().brief("Email and password are required")
            );
        }

        Ok(())
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

pub(crate) fn confirm_password(password: &str, confirmation: &str) -> Result<(), StatusError> {
    if password != confirmation {
        return Err(
            StatusError::unprocessable_entity().brief("Password confirmation does not match")
        );
    }

    Ok(())
}
