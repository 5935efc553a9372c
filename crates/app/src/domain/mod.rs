//! Storefront Domain Concerns

pub mod carts;
pub mod customers;
pub mod dashboard;
pub mod products;
pub mod staff;
