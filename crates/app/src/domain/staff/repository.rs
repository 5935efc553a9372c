//! Staff Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::{like_pattern, to_count},
    domain::staff::{
        data::{NewStaffUser, StaffFilter, StaffUpdate},
        models::{Privileges, StaffRole, StaffUser, StaffUuid},
    },
    pagination::PageRequest,
};

const LIST_STAFF_SQL: &str = include_str!("sql/list_staff.sql");
const COUNT_STAFF_SQL: &str = include_str!("sql/count_staff.sql");
const GET_STAFF_SQL: &str = include_str!("sql/get_staff.sql");
const CREATE_STAFF_SQL: &str = include_str!("sql/create_staff.sql");
const CREATE_PRIVILEGES_SQL: &str = include_str!("sql/create_privileges.sql");
const UPDATE_STAFF_SQL: &str = include_str!("sql/update_staff.sql");
const UPDATE_PRIVILEGES_SQL: &str = include_str!("sql/update_privileges.sql");
const TOGGLE_STAFF_STATUS_SQL: &str = include_str!("sql/toggle_staff_status.sql");
const DELETE_STAFF_SQL: &str = include_str!("sql/delete_staff.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStaffRepository;

impl PgStaffRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &StaffFilter,
        page: PageRequest,
    ) -> Result<Vec<StaffUser>, sqlx::Error> {
        query_as::<Postgres, StaffUser>(LIST_STAFF_SQL)
            .bind(filter.search.as_deref().map(like_pattern))
            .bind(filter.role.map(StaffRole::as_str))
            .bind(filter.is_active)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &StaffFilter,
    ) -> Result<u64, sqlx::Error> {
        let total: i64 = query_scalar(COUNT_STAFF_SQL)
            .bind(filter.search.as_deref().map(like_pattern))
            .bind(filter.role.map(StaffRole::as_str))
            .bind(filter.is_active)
            .fetch_one(&mut **tx)
            .await?;

        to_count(total)
    }

    pub(crate) async fn get_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
    ) -> Result<StaffUser, sqlx::Error> {
        query_as::<Postgres, StaffUser>(GET_STAFF_SQL)
            .bind(staff.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert the account and its all-off privilege row.
    pub(crate) async fn create_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: NewStaffUser,
    ) -> Result<StaffUuid, sqlx::Error> {
        query(CREATE_STAFF_SQL)
            .bind(staff.uuid.into_uuid())
            .bind(staff.first_name)
            .bind(staff.last_name)
            .bind(staff.email)
            .bind(staff.contact)
            .bind(staff.role.as_str())
            .execute(&mut **tx)
            .await?;

        query(CREATE_PRIVILEGES_SQL)
            .bind(staff.uuid.into_uuid())
            .execute(&mut **tx)
            .await?;

        Ok(staff.uuid)
    }

    pub(crate) async fn update_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
        update: StaffUpdate,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_STAFF_SQL)
            .bind(staff.into_uuid())
            .bind(update.first_name)
            .bind(update.last_name)
            .bind(update.email)
            .bind(update.contact)
            .bind(update.role.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn update_privileges(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
        privileges: Privileges,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_PRIVILEGES_SQL)
            .bind(staff.into_uuid())
            .bind(privileges.can_add_product)
            .bind(privileges.can_update_product)
            .bind(privileges.can_delete_product)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn toggle_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(TOGGLE_STAFF_STATUS_SQL)
            .bind(staff.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_staff(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        staff: StaffUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_STAFF_SQL)
            .bind(staff.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for StaffUser {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;

        Ok(Self {
            uuid: StaffUuid::from_uuid(row.try_get("uuid")?),
            first_name: row.try_get("fname")?,
            last_name: row.try_get("lname")?,
            email: row.try_get("email")?,
            contact: row.try_get("contact")?,
            role: role.parse().map_err(|e| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: Box::new(e),
            })?,
            is_active: row.try_get("is_active")?,
            privileges: Privileges {
                can_add_product: row.try_get("can_add_product")?,
                can_update_product: row.try_get("can_update_product")?,
                can_delete_product: row.try_get("can_delete_product")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
