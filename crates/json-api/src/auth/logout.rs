//! Logout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    auth::{errors::into_status_error, middleware::extract_bearer_token},
    extensions::*,
    state::State,
};

/// Logout Handler
///
/// Revokes the token sent with this request. Other tokens of the account stay valid.
#[endpoint(
    tags("auth"),
    summary = "Logout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Token revoked"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let token = extract_bearer_token(req).ok_or_else(StatusError::unauthorized)?;

    state
        .app
        .auth
        .logout(token)
        .await
        .map_err(into_status_error)?;

    tracing::info!(?principal, "logged out");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::{http::header::AUTHORIZATION, test::TestClient};
    use testresult::TestResult;

    use storefront_app::auth::{AuthServiceError, MockAuthService};

    use crate::test_helpers::{Mocks, customer_principal, service_as};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        service_as(
            Some(customer_principal()),
            Mocks {
                auth,
                ..Mocks::default()
            },
            Router::with_path("customer/logout").post(handler),
        )
    }

    #[tokio::test]
    async fn test_logout_revokes_presented_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_logout()
            .once()
            .withf(|token| token == "sf_v1_abc")
            .return_once(|_| Ok(()));

        let res = TestClient::post("http://example.com/customer/logout")
            .add_header(AUTHORIZATION, "Bearer sf_v1_abc", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_logout_with_already_revoked_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_logout()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::post("http://example.com/customer/logout")
            .add_header(AUTHORIZATION, "Bearer sf_v1_abc", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_logout_without_principal_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_logout().never();

        let service = service_as(
            None,
            Mocks {
                auth,
                ..Mocks::default()
            },
            Router::with_path("customer/logout").post(handler),
        );

        let res = TestClient::post("http://example.com/customer/logout")
            .add_header(AUTHORIZATION, "Bearer sf_v1_abc", true)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
