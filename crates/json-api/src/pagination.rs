//! Pagination response metadata.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::pagination::Page;

pub(crate) const PRODUCTS_PER_PAGE: u32 = 12;
pub(crate) const CUSTOMERS_PER_PAGE: u32 = 15;
pub(crate) const STAFF_PER_PAGE: u32 = 15;

/// Position of a page within a listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PageMeta {
    /// 1-based page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Number of matching items across all pages
    pub total: u64,

    /// Number of the last page
    pub last_page: u64,
}

impl<T> From<&Page<T>> for PageMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            last_page: page.last_page(),
        }
    }
}
