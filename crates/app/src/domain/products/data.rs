//! Products Data

use crate::domain::products::models::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub brand: String,
    pub name: String,
    pub image_path: Option<String>,
    pub description: Option<String>,
    pub quantity: u32,
    pub cost_price: u64,
    pub sell_price: u64,
    pub rating: u8,
    pub is_active: bool,
}

/// Product Update Data
///
/// Replaces every editable field except the image, which is only replaced when a new path
/// is given. The active flag is changed through
/// [`ProductsService::toggle_status`](crate::domain::products::ProductsService::toggle_status).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub brand: String,
    pub name: String,

    /// `None` keeps the current image.
    pub image_path: Option<String>,
    pub description: Option<String>,
    pub quantity: u32,
    pub cost_price: u64,
    pub sell_price: u64,
    pub rating: u8,
}

/// Catalog listing filters. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive substring over name, brand and description.
    pub search: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub min_rating: Option<u8>,
    pub is_active: Option<bool>,
}

impl ProductFilter {
    /// Public storefront view: active products unless the caller asked otherwise.
    #[must_use]
    pub fn storefront(mut self) -> Self {
        if self.is_active.is_none() {
            self.is_active = Some(true);
        }

        self
    }
}
