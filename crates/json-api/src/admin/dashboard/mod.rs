//! Back-office dashboard.

pub(crate) mod stats;
