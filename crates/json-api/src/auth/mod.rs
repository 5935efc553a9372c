//! Authentication

pub(crate) mod errors;
pub(crate) mod logout;
pub(crate) mod middleware;
pub(crate) mod models;
