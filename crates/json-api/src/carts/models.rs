//! Cart Models

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

use storefront_app::domain::carts::models::{Cart, CartLine};

use crate::{carts::errors::invalid_quantity, products::models::ProductResponse};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The customer owning the cart
    pub customer_uuid: Uuid,

    /// Lines in the order they were first added
    pub lines: Vec<CartLineResponse>,

    /// Sum of line subtotals at current prices, in pence/cents
    pub total: u64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total = cart.total();

        CartResponse {
            customer_uuid: cart.customer.into(),
            lines: cart.lines.into_iter().map(CartLineResponse::from).collect(),
            total,
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The unique identifier of the cart line
    pub uuid: Uuid,

    pub quantity: u32,

    /// Current sell price times quantity
    pub subtotal: u64,

    pub product: ProductResponse,

    /// The date and time the line was created
    pub created_at: String,

    /// The date and time the line was last updated
    pub updated_at: String,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        let subtotal = line.subtotal();

        Self {
            uuid: line.uuid.into(),
            quantity: line.quantity,
            subtotal,
            product: line.product.into(),
            created_at: line.created_at.to_string(),
            updated_at: line.updated_at.to_string(),
        }
    }
}

/// Whole number of units from a JSON number.
///
/// Fractional or out-of-range numbers are rejected the same way the cart service rejects
/// non-positive quantities.
pub(crate) fn whole_quantity(quantity: &Number) -> Result<i64, StatusError> {
    quantity.as_i64().ok_or_else(invalid_quantity)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use storefront_app::domain::{
        carts::models::CartLineUuid, customers::models::CustomerUuid,
        products::models::ProductUuid,
    };

    use crate::test_helpers::{make_line, make_product};

    use super::*;

    #[test]
    fn whole_numbers_are_accepted() -> Result<(), serde_json::Error> {
        let number: Number = serde_json::from_str("3")?;
        let negative: Number = serde_json::from_str("-4")?;

        assert_eq!(whole_quantity(&number).ok(), Some(3));
        assert_eq!(whole_quantity(&negative).ok(), Some(-4));

        Ok(())
    }

    #[test]
    fn fractional_numbers_are_rejected() -> Result<(), serde_json::Error> {
        let fractional: Number = serde_json::from_str("2.5")?;
        let huge: Number = serde_json::from_str("18446744073709551615")?;

        assert!(whole_quantity(&fractional).is_err(), "2.5 is not whole");
        assert!(whole_quantity(&huge).is_err(), "u64::MAX is out of range");

        Ok(())
    }

    #[test]
    fn cart_response_totals_lines() {
        let mut product = make_product(ProductUuid::new());

        product.sell_price = 1250;

        let cart = Cart::new(
            CustomerUuid::from_uuid(Uuid::nil()),
            vec![make_line(CartLineUuid::new(), product, 4)],
        );

        let response = CartResponse::from(cart);

        assert_eq!(response.total, 5000);
        assert_eq!(response.lines.first().map(|line| line.subtotal), Some(5000));
        assert_eq!(
            response.lines.first().map(|line| line.created_at.clone()),
            Some(Timestamp::UNIX_EPOCH.to_string())
        );
    }
}
