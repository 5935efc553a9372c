//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::models::Product;

/// Storefront view of a product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub brand: String,

    pub name: String,

    /// Relative path of the product image
    pub image_path: Option<String>,

    pub description: Option<String>,

    /// Units in stock
    pub quantity: u32,

    /// The price of the product in pence/cents
    pub sell_price: u64,

    /// Rating from 1 to 5
    pub rating: u8,

    pub is_active: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            brand: product.brand,
            name: product.name,
            image_path: product.image_path,
            description: product.description,
            quantity: product.quantity,
            sell_price: product.sell_price,
            rating: product.rating,
            is_active: product.is_active,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
