//! Carts
//!
//! Cart lines are checked against live product stock on every mutation. Stock is a ceiling,
//! never a reservation: two customers may each fill their cart up to the same units.

pub mod errors;
pub mod models;
pub mod quantity;
pub(crate) mod repository;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
