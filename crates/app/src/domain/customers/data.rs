//! Customers Data

use crate::domain::customers::models::CustomerUuid;

/// New Customer Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub uuid: CustomerUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
}

/// Customer Profile Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
}

/// Customer listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// Case-insensitive substring over names, email and contact number.
    pub search: Option<String>,
    pub is_active: Option<bool>,
}
