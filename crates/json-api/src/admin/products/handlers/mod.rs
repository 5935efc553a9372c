//! Catalog Administration Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
pub(crate) mod toggle_status;
pub(crate) mod update;
