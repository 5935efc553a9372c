//! Product Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub uuid: ProductUuid,
    pub brand: String,
    pub name: String,
    pub image_path: Option<String>,
    pub description: Option<String>,

    /// Units currently in stock.
    pub quantity: u32,

    /// Cost price in minor units.
    pub cost_price: u64,

    /// Sell price in minor units.
    pub sell_price: u64,

    /// Rating from 1 to 5.
    pub rating: u8,

    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
