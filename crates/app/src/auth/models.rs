//! Auth data models.

use jiff::Timestamp;

use crate::{
    auth::ApiTokenVersion,
    domain::{
        customers::models::{Customer, CustomerUuid},
        staff::{Capabilities, Capability, MissingCapability, models::StaffUuid},
    },
    uuids::TypedUuid,
};

/// API Token UUID
pub type ApiTokenUuid = TypedUuid<ApiTokenMetadata>;

/// Account an API token authenticates as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOwner {
    Customer(CustomerUuid),
    Staff(StaffUuid),
}

/// Which account table a login is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Customer,
    Staff,
}

/// Stored login details for one account.
#[derive(Clone)]
pub(crate) struct StoredCredentials {
    pub owner: TokenOwner,
    pub password_hash: Option<String>,
    pub is_active: bool,
}

impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("owner", &self.owner)
            .field("has_password", &self.password_hash.is_some())
            .field("is_active", &self.is_active)
            .finish()
    }
}

/// The authenticated caller of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Customer(CustomerUuid),

    /// Capabilities are resolved once, when the token is authenticated.
    Staff {
        uuid: StaffUuid,
        capabilities: Capabilities,
    },
}

impl Principal {
    #[must_use]
    pub const fn customer(&self) -> Option<CustomerUuid> {
        match self {
            Self::Customer(uuid) => Some(*uuid),
            Self::Staff { .. } => None,
        }
    }

    #[must_use]
    pub const fn staff(&self) -> Option<StaffUuid> {
        match self {
            Self::Staff { uuid, .. } => Some(*uuid),
            Self::Customer(_) => None,
        }
    }

    /// Customers hold no capabilities.
    pub fn require(&self, capability: Capability) -> Result<(), MissingCapability> {
        match self {
            Self::Staff { capabilities, .. } => capabilities.require(capability),
            Self::Customer(_) => Err(MissingCapability(capability)),
        }
    }
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: ApiTokenUuid,
    pub owner: TokenOwner,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: ApiTokenUuid,
    pub owner: TokenOwner,
    pub version: ApiTokenVersion,
    pub token_hash: String,
    pub expires_at: Option<Timestamp>,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}

/// A newly registered customer and their first token.
#[derive(Debug, Clone)]
pub struct Registration {
    pub customer: Customer,
    pub token: IssuedApiToken,
}
