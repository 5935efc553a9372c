//! Staff Data

use crate::domain::staff::models::{StaffRole, StaffUuid};

/// New Staff User Data. Privileges start with every flag off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaffUser {
    pub uuid: StaffUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub role: StaffRole,
}

/// Staff User Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub role: StaffRole,
}

/// Staff Profile Update Data. The role is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
}

/// Staff listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffFilter {
    pub search: Option<String>,
    pub role: Option<StaffRole>,
    pub is_active: Option<bool>,
}
