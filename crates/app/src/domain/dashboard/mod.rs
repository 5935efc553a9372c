//! Dashboard

mod errors;
mod models;
mod repository;
mod service;

pub use errors::DashboardServiceError;
pub use models::DashboardStats;
pub use service::*;
