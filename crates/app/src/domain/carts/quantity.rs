//! Cart line quantities.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::carts::errors::CartsServiceError;

/// A positive number of units, validated at the service boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// Accept a caller-supplied quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartsServiceError::InvalidQuantity`] for zero, negative values and
    /// values too large to store.
    pub fn parse(value: i64) -> Result<Self, CartsServiceError> {
        if value <= 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        u32::try_from(value)
            .ok()
            .filter(|units| i32::try_from(*units).is_ok())
            .map(Self)
            .ok_or(CartsServiceError::InvalidQuantity)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_are_accepted() {
        assert_eq!(Quantity::parse(1).map(Quantity::get).ok(), Some(1));
        assert_eq!(Quantity::parse(42).map(Quantity::get).ok(), Some(42));
    }

    #[test]
    fn zero_and_negative_values_are_rejected() {
        for value in [0, -1, i64::MIN] {
            assert!(
                matches!(Quantity::parse(value), Err(CartsServiceError::InvalidQuantity)),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn values_beyond_storage_range_are_rejected() {
        let too_large = i64::from(i32::MAX) + 1;

        assert!(matches!(
            Quantity::parse(too_large),
            Err(CartsServiceError::InvalidQuantity)
        ));
        assert!(Quantity::parse(i64::from(i32::MAX)).is_ok());
    }
}
