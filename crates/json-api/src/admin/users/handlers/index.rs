//! Staff Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::{
    domain::staff::{Capability, data::StaffFilter},
    pagination::PageRequest,
};

use crate::{
    admin::users::{
        errors::into_status_error,
        models::{StaffResponse, parse_role},
    },
    extensions::*,
    pagination::{PageMeta, STAFF_PER_PAGE},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StaffListResponse {
    pub users: Vec<StaffResponse>,
    pub meta: PageMeta,
}

/// Staff Index Handler
#[endpoint(
    tags("admin"),
    summary = "List Staff Users",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    search: QueryParam<String, false>,
    role: QueryParam<String, false>,
    is_active: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<StaffListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.capability_or_403(Capability::ManageStaff)?;

    let filter = StaffFilter {
        search: search.into_inner(),
        role: role.into_inner().as_deref().map(parse_role).transpose()?,
        is_active: is_active.into_inner(),
    };

    let page = PageRequest::new(page.into_inner(), per_page.into_inner(), STAFF_PER_PAGE);

    let users = state
        .app
        .staff
        .list_staff(filter, page)
        .await
        .map_err(into_status_error)?;

    let meta = PageMeta::from(&users);

    Ok(Json(StaffListResponse {
        users: users.items.into_iter().map(Into::into).collect(),
        meta,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::{
        auth::Principal,
        domain::staff::{
            MockStaffService,
            models::{StaffRole, StaffUuid},
        },
        pagination::Page,
    };

    use crate::test_helpers::{Mocks, admin_principal, make_staff, service_as, staff_principal};

    use super::*;

    fn make_service(principal: Principal, staff: MockStaffService) -> Service {
        service_as(
            Some(principal),
            Mocks {
                staff,
                ..Mocks::default()
            },
            Router::with_path("admin/users").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_filters_by_role() -> TestResult {
        let uuid = StaffUuid::new();

        let mut staff = MockStaffService::new();

        staff
            .expect_list_staff()
            .once()
            .withf(|filter, _| filter.role == Some(StaffRole::User))
            .return_once(move |_, page| {
                Ok(Page::new(vec![make_staff(uuid, StaffRole::User)], 1, page))
            });

        let response: StaffListResponse =
            TestClient::get("http://example.com/admin/users?role=user")
                .send(&make_service(admin_principal(), staff))
                .await
                .take_json()
                .await?;

        assert_eq!(response.users.len(), 1);
        assert_eq!(response.users.first().map(|u| u.role.as_str()), Some("user"));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_role_returns_400() -> TestResult {
        let mut staff = MockStaffService::new();

        staff.expect_list_staff().never();

        let res = TestClient::get("http://example.com/admin/users?role=owner")
            .send(&make_service(admin_principal(), staff))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_manage_staff_returns_403() -> TestResult {
        let res = TestClient::get("http://example.com/admin/users")
            .send(&make_service(
                staff_principal(&[Capability::AddProduct]),
                MockStaffService::new(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
