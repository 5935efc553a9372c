//! Staff Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

use crate::{domain::staff::capabilities::Capabilities, uuids::TypedUuid};

/// Staff User UUID
pub type StaffUuid = TypedUuid<StaffUser>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaffRole {
    Admin,
    User,
}

impl StaffRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl Display for StaffRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown staff role: {0}")]
pub struct UnknownStaffRole(pub String);

impl FromStr for StaffRole {
    type Err = UnknownStaffRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(UnknownStaffRole(other.to_string())),
        }
    }
}

/// Catalog permission flags granted to a non-admin staff user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Privileges {
    pub can_add_product: bool,
    pub can_update_product: bool,
    pub can_delete_product: bool,
}

/// Staff User Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffUser {
    pub uuid: StaffUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub role: StaffRole,
    pub is_active: bool,

    /// Stored flags. Ignored for admins, who hold every capability.
    pub privileges: Privileges,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StaffUser {
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::resolve(self.role, self.privileges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_their_names() {
        for role in [StaffRole::Admin, StaffRole::User] {
            assert_eq!(role.as_str().parse::<StaffRole>(), Ok(role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(
            "owner".parse::<StaffRole>(),
            Err(UnknownStaffRole("owner".to_string()))
        );
    }
}
