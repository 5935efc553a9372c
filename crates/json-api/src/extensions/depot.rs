//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use storefront_app::{
    auth::Principal,
    domain::{
        customers::models::CustomerUuid,
        staff::{Capability, models::StaffUuid},
    },
};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_principal(&mut self, principal: Principal);

    /// The authenticated caller; 401 when the auth middleware did not run or rejected the token.
    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    fn customer_or_403(&self) -> Result<CustomerUuid, StatusError>;

    fn staff_or_403(&self) -> Result<StaffUuid, StatusError>;

    /// A staff caller holding `capability`.
    fn capability_or_403(&self, capability: Capability) -> Result<StaffUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.obtain::<Principal>()
            .copied()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn customer_or_403(&self) -> Result<CustomerUuid, StatusError> {
        self.principal_or_401()?
            .customer()
            .ok_or_else(|| StatusError::forbidden().brief("A customer account is required"))
    }

    fn staff_or_403(&self) -> Result<StaffUuid, StatusError> {
        self.principal_or_401()?
            .staff()
            .ok_or_else(|| StatusError::forbidden().brief("A staff account is required"))
    }

    fn capability_or_403(&self, capability: Capability) -> Result<StaffUuid, StatusError> {
        let principal = self.principal_or_401()?;
        let staff = self.staff_or_403()?;

        principal.require(capability).map_err(|missing| {
            StatusError::forbidden().brief(format!("Missing capability: {}", missing.0))
        })?;

        Ok(staff)
    }
}
