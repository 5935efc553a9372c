//! Staff Account Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::staff::data::StaffProfileUpdate;

use crate::admin::users::models::StaffResponse;

/// Staff Session Response
///
/// `token` is only ever shown here.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StaffSessionResponse {
    pub user: StaffResponse,
    pub token: String,
}

/// Update Staff Profile Request
///
/// Role and privileges are managed through `/admin/users`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStaffProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
}

impl From<UpdateStaffProfileRequest> for StaffProfileUpdate {
    fn from(request: UpdateStaffProfileRequest) -> Self {
        StaffProfileUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            contact: request.contact,
        }
    }
}
