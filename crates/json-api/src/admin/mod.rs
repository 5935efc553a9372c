//! Back-office endpoints for staff accounts.

pub(crate) mod account;
pub(crate) mod customers;
pub(crate) mod dashboard;
pub(crate) mod products;
pub(crate) mod users;
