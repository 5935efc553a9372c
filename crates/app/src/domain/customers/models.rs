//! Customer Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Customer UUID
pub type CustomerUuid = TypedUuid<Customer>;

/// Customer Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub uuid: CustomerUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
