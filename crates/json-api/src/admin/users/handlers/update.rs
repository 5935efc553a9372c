//! Update Staff User Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use storefront_app::domain::staff::Capability;

use crate::{
    admin::users::{
        errors::into_status_error,
        models::{StaffResponse, UpdateStaffRequest},
    },
    extensions::*,
    state::State,
};

/// Update Staff User Handler
#[endpoint(
    tags("admin"),
    summary = "Update Staff User",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Staff user updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Staff user not found"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Missing manage_staff capability"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<UpdateStaffRequest>,
    depot: &mut Depot,
) -> Result<Json<StaffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let actor = depot.capability_or_403(Capability::ManageStaff)?;
    let update = json.into_inner().into_update()?;

    let user = state
        .app
        .staff
        .update_staff(user.into_inner().into(), update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(actor_uuid = %actor, staff_uuid = %user.uuid, "updated staff user");

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::staff::{
        MockStaffService, StaffServiceError,
        models::{StaffRole, StaffUuid},
    };

    use crate::test_helpers::{Mocks, admin_principal, make_staff, service_as};

    use super::*;

    fn make_service(staff: MockStaffService) -> Service {
        service_as(
            Some(admin_principal()),
            Mocks {
                staff,
                ..Mocks::default()
            },
            Router::with_path("admin/users/{user}").put(handler),
        )
    }

    fn payload() -> serde_json::Value {
        json!({
            "first_name": "Grace",
            "last_name": "Murray",
            "email": "grace@example.com",
            "contact": "07700 900001",
            "role": "admin"
        })
    }

    #[tokio::test]
    async fn test_update_promotes_user_to_admin() -> TestResult {
        let uuid = StaffUuid::new();

        let mut staff = MockStaffService::new();

        staff
            .expect_update_staff()
            .once()
            .withf(move |user, update| *user == uuid && update.role == StaffRole::Admin)
            .return_once(|user, update| {
                let mut updated = make_staff(user, update.role);

                updated.last_name = update.last_name;

                Ok(updated)
            });

        let body: StaffResponse = TestClient::put(format!("http://example.com/admin/users/{uuid}"))
            .json(&payload())
            .send(&make_service(staff))
            .await
            .take_json()
            .await?;

        assert_eq!(body.role, "admin");
        assert_eq!(body.last_name, "Murray");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_user_returns_404() -> TestResult {
        let mut staff = MockStaffService::new();

        staff
            .expect_update_staff()
            .once()
            .return_once(|_, _| Err(StaffServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/admin/users/{}", Uuid::now_v7()))
            .json(&payload())
            .send(&make_service(staff))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
