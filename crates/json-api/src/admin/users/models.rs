//! Staff Administration Models

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::{
    auth::MIN_PASSWORD_CHARS,
    domain::staff::{
        data::{NewStaffUser, StaffUpdate},
        models::{Privileges, StaffRole, StaffUser, StaffUuid},
    },
};

use crate::extensions::*;

/// Stored privilege flags of a staff user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct PrivilegesResponse {
    pub can_add_product: bool,
    pub can_update_product: bool,
    pub can_delete_product: bool,
}

impl From<Privileges> for PrivilegesResponse {
    fn from(privileges: Privileges) -> Self {
        Self {
            can_add_product: privileges.can_add_product,
            can_update_product: privileges.can_update_product,
            can_delete_product: privileges.can_delete_product,
        }
    }
}

/// Staff User Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StaffResponse {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,

    /// `admin` or `user`
    pub role: String,

    pub is_active: bool,
    pub privileges: PrivilegesResponse,

    /// Capabilities resolved from the role and privileges
    pub capabilities: Vec<String>,

    pub created_at: String,
    pub updated_at: String,
}

impl From<StaffUser> for StaffResponse {
    fn from(staff: StaffUser) -> Self {
        let capabilities = staff
            .capabilities()
            .iter()
            .map(|capability| capability.as_str().to_string())
            .collect();

        Self {
            uuid: staff.uuid.into(),
            first_name: staff.first_name,
            last_name: staff.last_name,
            email: staff.email,
            contact: staff.contact,
            role: staff.role.to_string(),
            is_active: staff.is_active,
            privileges: staff.privileges.into(),
            capabilities,
            created_at: staff.created_at.to_string(),
            updated_at: staff.updated_at.to_string(),
        }
    }
}

pub(crate) fn parse_role(role: &str) -> Result<StaffRole, StatusError> {
    role.parse::<StaffRole>().or_400("invalid role")
}

/// Create Staff User Request
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateStaffRequest {
    /// Optional client-chosen identifier; generated when omitted
    pub uuid: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,

    /// `admin` or `user`
    pub role: String,

    /// Initial password for `/admin/login`; the account cannot log in without one
    #[serde(default)]
    pub password: Option<String>,
}

impl CreateStaffRequest {
    /// The new account and its initial password, if one was given.
    pub(crate) fn into_new_staff(self) -> Result<(NewStaffUser, Option<String>), StatusError> {
        if self
            .password
            .as_ref()
            .is_some_and(|password| password.chars().count() < MIN_PASSWORD_CHARS)
        {
            return Err(StatusError::unprocessable_entity()
                .brief(format!("Password must be at least {MIN_PASSWORD_CHARS} characters")));
        }

        let new_staff = NewStaffUser {
            uuid: self.uuid.map_or_else(StaffUuid::new, StaffUuid::from_uuid),
            role: parse_role(&self.role)?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            contact: self.contact,
        };

        Ok((new_staff, self.password))
    }
}

impl std::fmt::Debug for CreateStaffRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateStaffRequest")
            .field("uuid", &self.uuid)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("has_password", &self.password.is_some())
            .finish_non_exhaustive()
    }
}

/// Update Staff User Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStaffRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,

    /// `admin` or `user`
    pub role: String,
}

impl UpdateStaffRequest {
    pub(crate) fn into_update(self) -> Result<StaffUpdate, StatusError> {
        Ok(StaffUpdate {
            role: parse_role(&self.role)?,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            contact: self.contact,
        })
    }
}

/// Privileges Request
///
/// Flags left out of the body are revoked.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PrivilegesRequest {
    #[serde(default)]
    pub can_add_product: bool,

    #[serde(default)]
    pub can_update_product: bool,

    #[serde(default)]
    pub can_delete_product: bool,
}

impl From<PrivilegesRequest> for Privileges {
    fn from(request: PrivilegesRequest) -> Self {
        Privileges {
            can_add_product: request.can_add_product,
            can_update_product: request.can_update_product,
            can_delete_product: request.can_delete_product,
        }
    }
}
