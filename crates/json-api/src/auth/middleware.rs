//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use storefront_app::auth::{AuthServiceError, Principal};

use crate::{extensions::*, state::State};

/// Resolve the bearer token to a [`Principal`] and store it in the depot.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let principal = match state.app.auth.authenticate_bearer(token).await {
        Ok(principal) => principal,
        Err(AuthServiceError::NotFound) => {
            res.render(StatusError::unauthorized().brief("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate api token: {source}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
        Err(error) => {
            error!("failed to process api token: {error}");

            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    record_principal(principal);

    depot.insert_principal(principal);

    ctrl.call_next(req, depot, res).await;
}

fn record_principal(principal: Principal) {
    let span = tracing::Span::current();

    match principal {
        Principal::Customer(uuid) => {
            span.record("principal", "customer");
            span.record("account_uuid", tracing::field::display(uuid));
        }
        Principal::Staff { uuid, .. } => {
            span.record("principal", "staff");
            span.record("account_uuid", tracing::field::display(uuid));
        }
    }
}

pub(crate) fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use storefront_app::{
        auth::MockAuthService,
        domain::{
            customers::models::CustomerUuid,
            staff::{Capabilities, Capability, models::StaffUuid},
        },
    };

    use crate::test_helpers::Mocks;

    use super::*;

    #[salvo::handler]
    async fn echo_principal(depot: &mut Depot, res: &mut Response) {
        let principal = match depot.principal_or_401() {
            Ok(Principal::Customer(uuid)) => format!("customer:{uuid}"),
            Ok(Principal::Staff { uuid, .. }) => format!("staff:{uuid}"),
            Err(_missing) => "missing".to_string(),
        };

        res.render(principal);
    }

    fn make_service(auth: MockAuthService) -> Service {
        let state = Mocks {
            auth,
            ..Mocks::default()
        }
        .into_state();

        let router = Router::new()
            .hoop(salvo::affix_state::inject(state))
            .hoop(handler)
            .push(Router::new().get(echo_principal));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_missing_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_bearer_authorization_header_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Basic abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_token_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "sf_v1_abc")
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer sf_v1_abc", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer sf_v1_abc", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_token_injects_customer_principal() -> TestResult {
        let customer = CustomerUuid::from_uuid(Uuid::now_v7());

        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "sf_v1_abc")
            .return_once(move |_| Ok(Principal::Customer(customer)));

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "bearer sf_v1_abc", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, format!("customer:{customer}"));

        Ok(())
    }

    #[tokio::test]
    async fn test_staff_token_injects_staff_principal() -> TestResult {
        let staff = StaffUuid::from_uuid(Uuid::now_v7());

        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(move |_| {
                Ok(Principal::Staff {
                    uuid: staff,
                    capabilities: Capabilities::NONE.with(Capability::AddProduct),
                })
            });

        let mut res = TestClient::get("http://example.com")
            .add_header(AUTHORIZATION, "Bearer sf_v1_abc", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, format!("staff:{staff}"));

        Ok(())
    }
}
