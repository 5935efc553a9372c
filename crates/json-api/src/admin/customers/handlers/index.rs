//! Customer Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::{domain::customers::data::CustomerFilter, pagination::PageRequest};

use crate::{
    admin::customers::{errors::into_status_error, models::CustomerResponse},
    extensions::*,
    pagination::{CUSTOMERS_PER_PAGE, PageMeta},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomersResponse {
    pub customers: Vec<CustomerResponse>,
    pub meta: PageMeta,
}

/// Customer Index Handler
#[endpoint(
    tags("admin"),
    summary = "List Customers",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    search: QueryParam<String, false>,
    is_active: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<CustomersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.staff_or_403()?;

    let filter = CustomerFilter {
        search: search.into_inner(),
        is_active: is_active.into_inner(),
    };

    let page = PageRequest::new(page.into_inner(), per_page.into_inner(), CUSTOMERS_PER_PAGE);

    let customers = state
        .app
        .customers
        .list_customers(filter, page)
        .await
        .map_err(into_status_error)?;

    let meta = PageMeta::from(&customers);

    Ok(Json(CustomersResponse {
        customers: customers.items.into_iter().map(Into::into).collect(),
        meta,
    }))
}
