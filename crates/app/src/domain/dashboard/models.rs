//! Dashboard Models

/// Headline counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_products: u64,
    pub active_products: u64,
    pub total_customers: u64,
    pub active_customers: u64,
    pub total_staff: u64,
    pub active_staff: u64,
}
