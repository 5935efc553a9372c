//! Customer Administration Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::customers::{
    data::NewCustomer,
    models::{Customer, CustomerUuid},
};

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            uuid: customer.uuid.into(),
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            contact: customer.contact,
            is_active: customer.is_active,
            created_at: customer.created_at.to_string(),
            updated_at: customer.updated_at.to_string(),
        }
    }
}

/// Create Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCustomerRequest {
    /// Optional client-chosen identifier; generated when omitted
    pub uuid: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            uuid: request.uuid.map_or_else(CustomerUuid::new, CustomerUuid::from_uuid),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            contact: request.contact,
        }
    }
}
