//! Auth repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenError, ApiTokenVersion,
        models::{
            AccountKind, ApiTokenMetadata, ApiTokenUuid, NewApiToken, Principal,
            StoredCredentials, TokenOwner,
        },
    },
    domain::{
        customers::models::CustomerUuid,
        staff::{
            Capabilities,
            models::{Privileges, StaffRole, StaffUuid},
        },
    },
};

const CREATE_API_TOKEN_SQL: &str = include_str!("sql/create_api_token.sql");
const LIST_API_TOKENS_SQL: &str = include_str!("sql/list_api_tokens.sql");
const REVOKE_API_TOKEN_SQL: &str = include_str!("sql/revoke_api_token.sql");
const TOUCH_API_TOKEN_SQL: &str = include_str!("sql/touch_api_token.sql");
const FIND_PRINCIPAL_SQL: &str = include_str!("sql/find_principal.sql");
const REVOKE_PRESENTED_API_TOKEN_SQL: &str = include_str!("sql/revoke_presented_api_token.sql");
const FIND_CUSTOMER_CREDENTIALS_SQL: &str = include_str!("sql/find_customer_credentials.sql");
const FIND_STAFF_CREDENTIALS_SQL: &str = include_str!("sql/find_staff_credentials.sql");
const SET_CUSTOMER_PASSWORD_SQL: &str = include_str!("sql/set_customer_password.sql");
const SET_STAFF_PASSWORD_SQL: &str = include_str!("sql/set_staff_password.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_api_token(
        &self,
        token: &NewApiToken,
    ) -> Result<ApiTokenMetadata, sqlx::Error> {
        let (customer, staff) = owner_columns(Some(token.owner));

        query_as::<Postgres, ApiTokenMetadata>(CREATE_API_TOKEN_SQL)
            .bind(token.uuid.into_uuid())
            .bind(customer)
            .bind(staff)
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(token.expires_at.map(SqlxTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }

    /// Tokens of one account, or of every account when `owner` is `None`.
    pub(crate) async fn list_api_tokens(
        &self,
        owner: Option<TokenOwner>,
    ) -> Result<Vec<ApiTokenMetadata>, sqlx::Error> {
        let (customer, staff) = owner_columns(owner);

        query_as::<Postgres, ApiTokenMetadata>(LIST_API_TOKENS_SQL)
            .bind(customer)
            .bind(staff)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn revoke_api_token(
        &self,
        token: ApiTokenUuid,
    ) -> Result<Option<ApiTokenMetadata>, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(REVOKE_API_TOKEN_SQL)
            .bind(token.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    /// Revoke a live token only when the caller also knows its verifier.
    pub(crate) async fn revoke_presented_api_token(
        &self,
        token: ApiTokenUuid,
        version: ApiTokenVersion,
        token_hash: &str,
    ) -> Result<Option<ApiTokenMetadata>, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(REVOKE_PRESENTED_API_TOKEN_SQL)
            .bind(token.into_uuid())
            .bind(version.as_i16())
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn find_credentials(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<StoredCredentials>, sqlx::Error> {
        let sql = match kind {
            AccountKind::Customer => FIND_CUSTOMER_CREDENTIALS_SQL,
            AccountKind::Staff => FIND_STAFF_CREDENTIALS_SQL,
        };

        let row = query(sql).bind(email).fetch_optional(&self.pool).await?;

        row.map(|row| {
            let uuid: Uuid = row.try_get("uuid")?;

            let owner = match kind {
                AccountKind::Customer => TokenOwner::Customer(CustomerUuid::from_uuid(uuid)),
                AccountKind::Staff => TokenOwner::Staff(StaffUuid::from_uuid(uuid)),
            };

            Ok(StoredCredentials {
                owner,
                password_hash: row.try_get("password_hash")?,
                is_active: row.try_get("is_active")?,
            })
        })
        .transpose()
    }

    /// Store a password hash. Returns the number of accounts updated.
    pub(crate) async fn set_password(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        owner: TokenOwner,
        password_hash: &str,
    ) -> Result<u64, sqlx::Error> {
        let (sql, uuid) = match owner {
            TokenOwner::Customer(uuid) => (SET_CUSTOMER_PASSWORD_SQL, uuid.into_uuid()),
            TokenOwner::Staff(uuid) => (SET_STAFF_PASSWORD_SQL, uuid.into_uuid()),
        };

        let rows_affected = query(sql)
            .bind(uuid)
            .bind(password_hash)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn touch_api_token_last_used(
        &self,
        token: ApiTokenUuid,
    ) -> Result<(), sqlx::Error> {
        query(TOUCH_API_TOKEN_SQL)
            .bind(token.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Principal for a live token of an active account matching the given verifier.
    pub(crate) async fn find_principal(
        &self,
        token: ApiTokenUuid,
        version: ApiTokenVersion,
        token_hash: &str,
    ) -> Result<Option<Principal>, sqlx::Error> {
        let row = query(FIND_PRINCIPAL_SQL)
            .bind(token.into_uuid())
            .bind(version.as_i16())
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| principal_from_row(&row)).transpose()
    }
}

fn owner_columns(owner: Option<TokenOwner>) -> (Option<Uuid>, Option<Uuid>) {
    match owner {
        Some(TokenOwner::Customer(uuid)) => (Some(uuid.into_uuid()), None),
        Some(TokenOwner::Staff(uuid)) => (None, Some(uuid.into_uuid())),
        None => (None, None),
    }
}

fn owner_from_row(row: &PgRow) -> Result<TokenOwner, sqlx::Error> {
    let customer: Option<Uuid> = row.try_get("customer_uuid")?;
    let staff: Option<Uuid> = row.try_get("staff_uuid")?;

    match (customer, staff) {
        (Some(uuid), None) => Ok(TokenOwner::Customer(CustomerUuid::from_uuid(uuid))),
        (None, Some(uuid)) => Ok(TokenOwner::Staff(StaffUuid::from_uuid(uuid))),
        _ => Err(sqlx::Error::ColumnDecode {
            index: "customer_uuid".to_string(),
            source: "api token must have exactly one owner".into(),
        }),
    }
}

fn principal_from_row(row: &PgRow) -> Result<Principal, sqlx::Error> {
    match owner_from_row(row)? {
        TokenOwner::Customer(uuid) => Ok(Principal::Customer(uuid)),
        TokenOwner::Staff(uuid) => {
            let role: String = row.try_get("staff_role")?;

            let role: StaffRole = role.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "staff_role".to_string(),
                source: Box::new(e),
            })?;

            let privileges = Privileges {
                can_add_product: row.try_get("can_add_product")?,
                can_update_product: row.try_get("can_update_product")?,
                can_delete_product: row.try_get("can_delete_product")?,
            };

            Ok(Principal::Staff {
                uuid,
                capabilities: Capabilities::resolve(role, privileges),
            })
        }
    }
}

impl<'r> FromRow<'r, PgRow> for ApiTokenMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let version: i16 = row.try_get("version")?;

        Ok(Self {
            uuid: ApiTokenUuid::from_uuid(row.try_get("uuid")?),
            owner: owner_from_row(row)?,
            version: ApiTokenVersion::try_from(version).map_err(|e: ApiTokenError| {
                sqlx::Error::ColumnDecode {
                    index: "version".to_string(),
                    source: Box::new(e),
                }
            })?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: row
                .try_get::<Option<SqlxTimestamp>, _>("last_used_at")?
                .map(SqlxTimestamp::to_jiff),
            expires_at: row
                .try_get::<Option<SqlxTimestamp>, _>("expires_at")?
                .map(SqlxTimestamp::to_jiff),
            revoked_at: row
                .try_get::<Option<SqlxTimestamp>, _>("revoked_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
