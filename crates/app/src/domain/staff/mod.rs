//! Staff accounts and their capabilities.

pub mod capabilities;
pub mod data;
pub mod errors;
pub mod models;
pub(crate) mod repository;
pub mod service;

pub use capabilities::{Capabilities, Capability, MissingCapability};
pub use errors::StaffServiceError;
pub use service::*;
