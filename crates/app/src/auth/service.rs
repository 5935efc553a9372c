//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info, warn};
use zeroize::Zeroize;

use crate::{
    auth::{
        ApiTokenVersion, AuthServiceError, format_api_token, generate_api_token_secret,
        hash_password,
        models::{
            AccountKind, ApiTokenMetadata, ApiTokenUuid, IssuedApiToken, NewApiToken, Principal,
            Registration, TokenOwner,
        },
        parse_api_token,
        repository::PgAuthRepository,
        token_verifier, verify_password,
    },
    domain::customers::{data::NewCustomer, repository::PgCustomersRepository},
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    pool: PgPool,
    repository: PgAuthRepository,
    customers: PgCustomersRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool.clone()),
            customers: PgCustomersRepository::new(),
            pool,
        }
    }

    /// Issue a new API token for a customer or staff account.
    ///
    /// The raw token is only available in the returned value.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidReference`] when the account does not exist.
    pub async fn issue_api_token(
        &self,
        owner: TokenOwner,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = ApiTokenUuid::new();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid.into_uuid(), version, &secret);
        let token_hash = token_verifier(&token_uuid.into_uuid(), version, &secret);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token_uuid,
                owner,
                version,
                token_hash,
                expires_at,
            })
            .await?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// List tokens for one account, or every token when `owner` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        owner: Option<TokenOwner>,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self.repository.list_api_tokens(owner).await?)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        Ok(self.repository.revoke_api_token(token).await?.is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let parsed = parse_api_token(bearer_token).map_err(|error| {
            debug!(%error, "rejected malformed bearer token");

            AuthServiceError::NotFound
        })?;

        let token_uuid = ApiTokenUuid::from_uuid(parsed.token_uuid);
        let token_hash = token_verifier(&parsed.token_uuid, parsed.version, &parsed.secret);

        let principal = self
            .repository
            .find_principal(token_uuid, parsed.version, &token_hash)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        // Best-effort metadata update; auth success should not depend on this write.
        if let Err(error) = self.repository.touch_api_token_last_used(token_uuid).await {
            warn!(%error, token = %token_uuid, "failed to record api token use");
        }

        Ok(principal)
    }

    async fn register_customer(
        &self,
        customer: NewCustomer,
        mut password: String,
    ) -> Result<Registration, AuthServiceError> {
        let password_hash = hash_password(&password);

        password.zeroize();

        let password_hash = password_hash?;

        let mut tx = self.pool.begin().await?;

        let customer = self.customers.create_customer(&mut tx, customer).await?;

        self.repository
            .set_password(&mut tx, TokenOwner::Customer(customer.uuid), &password_hash)
            .await?;

        tx.commit().await?;

        let token = self
            .issue_api_token(TokenOwner::Customer(customer.uuid), None)
            .await?;

        info!(customer = %customer.uuid, "registered customer");

        Ok(Registration { customer, token })
    }

    async fn login(
        &self,
        kind: AccountKind,
        email: &str,
        password: &str,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let Some(stored) = self.repository.find_credentials(kind, email).await? else {
            debug!(?kind, "login for unknown account");

            return Err(AuthServiceError::InvalidCredentials);
        };

        let Some(password_hash) = stored.password_hash.as_deref() else {
            debug!(owner = ?stored.owner, "login for account without a password");

            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(password_hash, password)? {
            debug!(owner = ?stored.owner, "login with wrong password");

            return Err(AuthServiceError::InvalidCredentials);
        }

        if !stored.is_active {
            return Err(AuthServiceError::AccountDisabled);
        }

        let issued = self.issue_api_token(stored.owner, None).await?;

        info!(owner = ?stored.owner, token = %issued.metadata.uuid, "issued login token");

        Ok(issued)
    }

    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        let parsed = parse_api_token(bearer_token).map_err(|_e| AuthServiceError::NotFound)?;

        let token_uuid = ApiTokenUuid::from_uuid(parsed.token_uuid);
        let token_hash = token_verifier(&parsed.token_uuid, parsed.version, &parsed.secret);

        let revoked = self
            .repository
            .revoke_presented_api_token(token_uuid, parsed.version, &token_hash)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        info!(owner = ?revoked.owner, token = %token_uuid, "revoked presented token");

        Ok(())
    }

    async fn set_password(
        &self,
        owner: TokenOwner,
        mut password: String,
    ) -> Result<(), AuthServiceError> {
        let password_hash = hash_password(&password);

        password.zeroize();

        let password_hash = password_hash?;

        let mut tx = self.pool.begin().await?;

        let rows_affected = self
            .repository
            .set_password(&mut tx, owner, &password_hash)
            .await?;

        if rows_affected == 0 {
            return Err(AuthServiceError::InvalidReference);
        }

        tx.commit().await?;

        info!(?owner, "set account password");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the account it authenticates as.
    ///
    /// Unknown, revoked and expired tokens, and tokens of deactivated accounts, are all
    /// reported as [`AuthServiceError::NotFound`].
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;

    /// Create a customer with a password and issue their first token.
    async fn register_customer(
        &self,
        customer: NewCustomer,
        password: String,
    ) -> Result<Registration, AuthServiceError>;

    /// Exchange an email and password for a new token.
    ///
    /// Unknown emails, wrong passwords and accounts without a password are all
    /// [`AuthServiceError::InvalidCredentials`]. A deactivated account with the right
    /// password is [`AuthServiceError::AccountDisabled`].
    async fn login(
        &self,
        kind: AccountKind,
        email: &str,
        password: &str,
    ) -> Result<IssuedApiToken, AuthServiceError>;

    /// Revoke the token being presented.
    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError>;

    /// Replace an account's password.
    async fn set_password(&self, owner: TokenOwner, password: String)
    -> Result<(), AuthServiceError>;
}
