//! Staff Account Handlers

pub(crate) mod login;
pub(crate) mod profile;
pub(crate) mod update_profile;
