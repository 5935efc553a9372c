//! Catalog Administration Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    models::{Product, ProductUuid},
};

/// Back-office view of a product, including its cost price.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminProductResponse {
    pub uuid: Uuid,
    pub brand: String,
    pub name: String,
    pub image_path: Option<String>,
    pub description: Option<String>,

    /// Units in stock
    pub quantity: u32,

    /// Purchase price in pence/cents
    pub cost_price: u64,

    /// Sale price in pence/cents
    pub sell_price: u64,

    pub rating: u8,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for AdminProductResponse {
    fn from(product: Product) -> Self {
        Self {
            uuid: product.uuid.into(),
            brand: product.brand,
            name: product.name,
            image_path: product.image_path,
            description: product.description,
            quantity: product.quantity,
            cost_price: product.cost_price,
            sell_price: product.sell_price,
            rating: product.rating,
            is_active: product.is_active,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

fn default_active() -> bool {
    true
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Optional client-chosen identifier; generated when omitted
    pub uuid: Option<Uuid>,
    pub brand: String,
    pub name: String,
    pub image_path: Option<String>,
    pub description: Option<String>,
    pub quantity: u32,
    pub cost_price: u64,
    pub sell_price: u64,

    /// Rating from 1 to 5
    pub rating: u8,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            uuid: request.uuid.map_or_else(ProductUuid::new, ProductUuid::from_uuid),
            brand: request.brand,
            name: request.name,
            image_path: request.image_path,
            description: request.description,
            quantity: request.quantity,
            cost_price: request.cost_price,
            sell_price: request.sell_price,
            rating: request.rating,
            is_active: request.is_active,
        }
    }
}

/// Update Product Request
///
/// Every editable field is replaced. Omitting `image_path` keeps the current image.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub brand: String,
    pub name: String,
    pub image_path: Option<String>,
    pub description: Option<String>,
    pub quantity: u32,
    pub cost_price: u64,
    pub sell_price: u64,
    pub rating: u8,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            brand: request.brand,
            name: request.name,
            image_path: request.image_path,
            description: request.description,
            quantity: request.quantity,
            cost_price: request.cost_price,
            sell_price: request.sell_price,
            rating: request.rating,
        }
    }
}
