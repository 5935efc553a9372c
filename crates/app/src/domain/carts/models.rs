//! Cart Models

use jiff::Timestamp;

use crate::{
    domain::{customers::models::CustomerUuid, products::models::Product},
    uuids::TypedUuid,
};

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLine>;

/// One product in a customer's cart, joined with the product as it is now.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub uuid: CartLineUuid,
    pub customer: CustomerUuid,
    pub product: Product,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartLine {
    /// Line quantity times the product's current sell price, in minor units.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.product.sell_price)
    }
}

/// A customer's cart. Never stored; assembled from its lines on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub customer: CustomerUuid,
    pub lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new(customer: CustomerUuid, lines: Vec<CartLine>) -> Self {
        Self { customer, lines }
    }

    /// Sum of every line subtotal, in minor units.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(0, u64::saturating_add)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
