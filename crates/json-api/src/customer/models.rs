//! Customer Account Models

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use storefront_app::domain::customers::{
    data::{CustomerUpdate, NewCustomer},
    models::CustomerUuid,
};

use crate::{admin::customers::models::CustomerResponse, auth::models::confirm_password};

/// Register Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    /// Split into the new account and its confirmed password.
    pub(crate) fn into_registration(self) -> Result<(NewCustomer, String), StatusError> {
        confirm_password(&self.password, &self.password_confirmation)?;

        let customer = NewCustomer {
            uuid: CustomerUuid::new(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            contact: self.contact,
        };

        Ok((customer, self.password))
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("contact", &self.contact)
            .finish_non_exhaustive()
    }
}

/// Update Profile Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
}

impl From<UpdateProfileRequest> for CustomerUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        CustomerUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            contact: request.contact,
        }
    }
}

/// Customer Session Response
///
/// `token` is only ever shown here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerSessionResponse {
    pub customer: CustomerResponse,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn request(confirmation: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            contact: "07700 900000".to_string(),
            password: "correct horse".to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    #[test]
    fn registration_carries_the_confirmed_password() -> TestResult {
        let (customer, password) = request("correct horse").into_registration()?;

        assert_eq!(customer.email, "ada@example.com");
        assert_eq!(password, "correct horse");

        Ok(())
    }

    #[test]
    fn registration_with_mismatched_confirmation_fails() {
        assert!(request("battery staple").into_registration().is_err());
    }

    #[test]
    fn debug_output_omits_passwords() {
        assert!(!format!("{:?}", request("correct horse")).contains("correct horse"));
    }
}
