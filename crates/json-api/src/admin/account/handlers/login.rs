//! Staff Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use storefront_app::auth::{AccountKind, TokenOwner};

use crate::{
    admin::{account::models::StaffSessionResponse, users},
    auth::{self, models::LoginRequest},
    extensions::*,
    state::State,
};

/// Staff Login Handler
///
/// Checked against staff accounts only; customer credentials never match.
#[endpoint(
    tags("admin"),
    summary = "Staff Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
        (status_code = StatusCode::FORBIDDEN, description = "Account deactivated"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Missing email or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<StaffSessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request.validate()?;

    let issued = state
        .app
        .auth
        .login(AccountKind::Staff, request.email.trim(), &request.password)
        .await
        .map_err(auth::errors::into_status_error)?;

    let TokenOwner::Staff(uuid) = issued.metadata.owner else {
        tracing::error!(owner = ?issued.metadata.owner, "staff login issued a customer token");

        return Err(StatusError::internal_server_error());
    };

    let user = state
        .app
        .staff
        .get_staff(uuid)
        .await
        .map_err(users::errors::into_status_error)?;

    tracing::info!(staff_uuid = %uuid, role = %user.role, "staff logged in");

    Ok(Json(StaffSessionResponse {
        user: user.into(),
        token: issued.token,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::{
        auth::{AuthServiceError, MockAuthService},
        domain::staff::{MockStaffService, models::StaffRole},
    };

    use crate::test_helpers::{Mocks, TEST_STAFF_UUID, make_issued_token, make_staff, service_as};

    use super::*;

    fn make_service(auth: MockAuthService, staff: MockStaffService) -> Service {
        service_as(
            None,
            Mocks {
                auth,
                staff,
                ..Mocks::default()
            },
            Router::with_path("admin/login").post(handler),
        )
    }

    fn payload() -> serde_json::Value {
        json!({ "email": "grace@example.com", "password": "correct horse" })
    }

    #[tokio::test]
    async fn test_staff_login_returns_user_and_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .withf(|kind, email, _| *kind == AccountKind::Staff && email == "grace@example.com")
            .return_once(|_, _, _| Ok(make_issued_token(TokenOwner::Staff(TEST_STAFF_UUID))));

        let mut staff = MockStaffService::new();

        staff
            .expect_get_staff()
            .once()
            .withf(|uuid| *uuid == TEST_STAFF_UUID)
            .return_once(|uuid| Ok(make_staff(uuid, StaffRole::Admin)));

        let mut res = TestClient::post("http://example.com/admin/login")
            .json(&payload())
            .send(&make_service(auth, staff))
            .await;

        let body: StaffSessionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.user.role, "admin");
        assert!(body.token.starts_with("sf_v1_"));

        Ok(())
    }

    #[tokio::test]
    async fn test_staff_login_with_bad_credentials_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _, _| Err(AuthServiceError::InvalidCredentials));

        let mut staff = MockStaffService::new();

        staff.expect_get_staff().never();

        let res = TestClient::post("http://example.com/admin/login")
            .json(&payload())
            .send(&make_service(auth, staff))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivated_staff_login_returns_403() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _, _| Err(AuthServiceError::AccountDisabled));

        let res = TestClient::post("http://example.com/admin/login")
            .json(&payload())
            .send(&make_service(auth, MockStaffService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
