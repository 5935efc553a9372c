//! App Router

use salvo::Router;

use crate::{admin, auth, carts, customer, products};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("customer/register").post(customer::register::handler))
        .push(Router::with_path("customer/login").post(customer::login::handler))
        .push(Router::with_path("admin/login").post(admin::account::login::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(customer_router())
                .push(cart_router())
                .push(admin_router()),
        )
}

fn customer_router() -> Router {
    Router::with_path("customer")
        .push(Router::with_path("logout").post(auth::logout::handler))
        .push(
            Router::with_path("profile")
                .get(customer::profile::handler)
                .put(customer::update_profile::handler),
        )
}

fn cart_router() -> Router {
    Router::with_path("cart")
        .get(carts::get::handler)
        .post(carts::add::handler)
        .delete(carts::clear::handler)
        .push(
            Router::with_path("{line}")
                .put(carts::update::handler)
                .delete(carts::remove::handler),
        )
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .push(Router::with_path("logout").post(auth::logout::handler))
        .push(
            Router::with_path("profile")
                .get(admin::account::profile::handler)
                .put(admin::account::update_profile::handler),
        )
        .push(Router::with_path("dashboard/stats").get(admin::dashboard::stats::handler))
        .push(
            Router::with_path("products")
                .get(admin::products::index::handler)
                .post(admin::products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(admin::products::update::handler)
                        .delete(admin::products::delete::handler)
                        .push(
                            Router::with_path("toggle-status")
                                .patch(admin::products::toggle_status::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("customers")
                .get(admin::customers::index::handler)
                .post(admin::customers::create::handler)
                .push(
                    Router::with_path("{customer}")
                        .get(admin::customers::get::handler)
                        .delete(admin::customers::delete::handler)
                        .push(
                            Router::with_path("toggle-status")
                                .patch(admin::customers::toggle_status::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("users")
                .get(admin::users::index::handler)
                .post(admin::users::create::handler)
                .push(
                    Router::with_path("{user}")
                        .get(admin::users::get::handler)
                        .put(admin::users::update::handler)
                        .delete(admin::users::delete::handler)
                        .push(
                            Router::with_path("toggle-status")
                                .patch(admin::users::toggle_status::handler),
                        )
                        .push(
                            Router::with_path("privileges").put(admin::users::privileges::handler),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::AUTHORIZATION,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use storefront_app::{
        auth::{AccountKind, AuthServiceError, MockAuthService},
        domain::products::MockProductsService,
        pagination::Page,
    };

    use crate::test_helpers::{Mocks, customer_principal};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_catalog_is_public() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|_, page| Ok(Page::new(Vec::new(), 0, page)));

        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(Mocks {
                products,
                auth,
                ..Mocks::default()
            }))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["meta"]["total"], 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_cart_requires_bearer_token() -> TestResult {
        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_rejects_unknown_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::get("http://example.com/admin/dashboard/stats")
            .add_header(AUTHORIZATION, "Bearer sf_v1_unknown", true)
            .send(&make_service(Mocks {
                auth,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_login_is_public() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();
        auth.expect_login()
            .once()
            .withf(|kind, _, _| *kind == AccountKind::Staff)
            .return_once(|_, _, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::post("http://example.com/admin/login")
            .json(&serde_json::json!({ "email": "grace@example.com", "password": "nope-nope" }))
            .send(&make_service(Mocks {
                auth,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_requires_bearer_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let res = TestClient::get("http://example.com/customer/profile")
            .send(&make_service(Mocks {
                auth,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_logout_goes_through_auth_middleware() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(customer_principal()));
        auth.expect_logout()
            .once()
            .withf(|token| token == "sf_v1_abc")
            .return_once(|_| Ok(()));

        let res = TestClient::post("http://example.com/customer/logout")
            .add_header(AUTHORIZATION, "Bearer sf_v1_abc", true)
            .send(&make_service(Mocks {
                auth,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }
}
