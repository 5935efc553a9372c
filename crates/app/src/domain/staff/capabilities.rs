//! Capability sets resolved from a staff account's role and privilege flags.
//!
//! A capability set is computed once per request and then consulted by every authorization
//! decision for that request.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::domain::staff::models::{Privileges, StaffRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AddProduct,
    UpdateProduct,
    DeleteProduct,

    /// Create, edit, deactivate and delete staff accounts, and change their privileges.
    ManageStaff,
}

impl Capability {
    pub const ALL: [Self; 4] = [
        Self::AddProduct,
        Self::UpdateProduct,
        Self::DeleteProduct,
        Self::ManageStaff,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddProduct => "add_product",
            Self::UpdateProduct => "update_product",
            Self::DeleteProduct => "delete_product",
            Self::ManageStaff => "manage_staff",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::AddProduct => 1,
            Self::UpdateProduct => 1 << 1,
            Self::DeleteProduct => 1 << 2,
            Self::ManageStaff => 1 << 3,
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing capability: {0}")]
pub struct MissingCapability(pub Capability);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Self = Self(0);

    /// Admins hold every capability. Users hold exactly their privilege flags and can never
    /// manage staff.
    #[must_use]
    pub fn resolve(role: StaffRole, privileges: Privileges) -> Self {
        if role == StaffRole::Admin {
            return Capability::ALL.into_iter().collect();
        }

        [
            (privileges.can_add_product, Capability::AddProduct),
            (privileges.can_update_product, Capability::UpdateProduct),
            (privileges.can_delete_product, Capability::DeleteProduct),
        ]
        .into_iter()
        .filter_map(|(granted, capability)| granted.then_some(capability))
        .collect()
    }

    #[must_use]
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub fn require(self, capability: Capability) -> Result<(), MissingCapability> {
        if self.contains(capability) {
            Ok(())
        } else {
            Err(MissingCapability(capability))
        }
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(*capability))
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_holds_every_capability_regardless_of_flags() {
        let capabilities = Capabilities::resolve(StaffRole::Admin, Privileges::default());

        for capability in Capability::ALL {
            assert!(capabilities.contains(capability), "admin should hold {capability}");
        }
    }

    #[test]
    fn user_holds_only_granted_flags() {
        let capabilities = Capabilities::resolve(
            StaffRole::User,
            Privileges {
                can_add_product: true,
                can_update_product: false,
                can_delete_product: true,
            },
        );

        assert_eq!(
            capabilities.iter().collect::<Vec<_>>(),
            vec![Capability::AddProduct, Capability::DeleteProduct]
        );
    }

    #[test]
    fn user_never_manages_staff() {
        let capabilities = Capabilities::resolve(
            StaffRole::User,
            Privileges {
                can_add_product: true,
                can_update_product: true,
                can_delete_product: true,
            },
        );

        assert_eq!(
            capabilities.require(Capability::ManageStaff),
            Err(MissingCapability(Capability::ManageStaff))
        );
    }

    #[test]
    fn empty_set_requires_nothing_it_lacks() {
        assert!(Capabilities::NONE.require(Capability::AddProduct).is_err());
        assert_eq!(Capabilities::NONE.iter().count(), 0);
    }
}
