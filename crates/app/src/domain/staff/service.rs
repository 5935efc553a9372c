//! Staff service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::staff::{
        data::{NewStaffUser, StaffFilter, StaffProfileUpdate, StaffUpdate},
        errors::StaffServiceError,
        models::{Privileges, StaffRole, StaffUser, StaffUuid},
        repository::PgStaffRepository,
    },
    pagination::{Page, PageRequest},
};

#[derive(Debug, Clone)]
pub struct PgStaffService {
    db: Db,
    repository: PgStaffRepository,
}

impl PgStaffService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgStaffRepository::new(),
        }
    }
}

#[async_trait]
impl StaffService for PgStaffService {
    async fn list_staff(
        &self,
        filter: StaffFilter,
        page: PageRequest,
    ) -> Result<Page<StaffUser>, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self.repository.list_staff(&mut tx, &filter, page).await?;
        let total = self.repository.count_staff(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(Page::new(items, total, page))
    }

    async fn get_staff(&self, staff: StaffUuid) -> Result<StaffUser, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let staff = self.repository.get_staff(&mut tx, staff).await?;

        tx.commit().await?;

        Ok(staff)
    }

    async fn create_staff(&self, staff: NewStaffUser) -> Result<StaffUser, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let uuid = self.repository.create_staff(&mut tx, staff).await?;
        let created = self.repository.get_staff(&mut tx, uuid).await?;

        tx.commit().await?;

        info!(staff = %created.uuid, role = %created.role, "created staff user");

        Ok(created)
    }

    async fn update_staff(
        &self,
        staff: StaffUuid,
        update: StaffUpdate,
    ) -> Result<StaffUser, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.update_staff(&mut tx, staff, update).await?;

        if rows_affected == 0 {
            return Err(StaffServiceError::NotFound);
        }

        let updated = self.repository.get_staff(&mut tx, staff).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn update_profile(
        &self,
        staff: StaffUuid,
        update: StaffProfileUpdate,
    ) -> Result<StaffUser, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.get_staff(&mut tx, staff).await?;

        self.repository
            .update_staff(
                &mut tx,
                staff,
                StaffUpdate {
                    first_name: update.first_name,
                    last_name: update.last_name,
                    email: update.email,
                    contact: update.contact,
                    role: current.role,
                },
            )
            .await?;

        let updated = self.repository.get_staff(&mut tx, staff).await?;

        tx.commit().await?;

        info!(%staff, "updated staff profile");

        Ok(updated)
    }

    async fn update_privileges(
        &self,
        staff: StaffUuid,
        privileges: Privileges,
    ) -> Result<StaffUser, StaffServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.repository.get_staff(&mut tx, staff).await?;

        if current.role == StaffRole::Admin {
            return Err(StaffServiceError::AdminPrivilegesImmutable);
        }

        self.repository
            .update_privileges(&mut tx, staff, privileges)
            .await?;

        let updated = self.repository.get_staff(&mut tx, staff).await?;

        tx.commit().await?;

        info!(%staff, ?privileges, "updated staff privileges");

        Ok(updated)
    }

    async fn toggle_status(
        &self,
        actor: StaffUuid,
        staff: StaffUuid,
    ) -> Result<StaffUser, StaffServiceError> {
        if actor == staff {
            return Err(StaffServiceError::CannotModifySelf);
        }

        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.toggle_status(&mut tx, staff).await?;

        if rows_affected == 0 {
            return Err(StaffServiceError::NotFound);
        }

        let toggled = self.repository.get_staff(&mut tx, staff).await?;

        tx.commit().await?;

        info!(%actor, %staff, is_active = toggled.is_active, "toggled staff status");

        Ok(toggled)
    }

    async fn delete_staff(
        &self,
        actor: StaffUuid,
        staff: StaffUuid,
    ) -> Result<(), StaffServiceError> {
        if actor == staff {
            return Err(StaffServiceError::CannotModifySelf);
        }

        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_staff(&mut tx, staff).await?;

        if rows_affected == 0 {
            return Err(StaffServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%actor, %staff, "deleted staff user");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait StaffService: Send + Sync {
    /// Retrieves one page of staff users, newest first.
    async fn list_staff(
        &self,
        filter: StaffFilter,
        page: PageRequest,
    ) -> Result<Page<StaffUser>, StaffServiceError>;

    async fn get_staff(&self, staff: StaffUuid) -> Result<StaffUser, StaffServiceError>;

    /// Creates a staff account with every privilege flag off.
    async fn create_staff(&self, staff: NewStaffUser) -> Result<StaffUser, StaffServiceError>;

    async fn update_staff(
        &self,
        staff: StaffUuid,
        update: StaffUpdate,
    ) -> Result<StaffUser, StaffServiceError>;

    /// Replaces the caller's own name, email and contact number, keeping their role.
    async fn update_profile(
        &self,
        staff: StaffUuid,
        update: StaffProfileUpdate,
    ) -> Result<StaffUser, StaffServiceError>;

    /// Replaces the privilege flags of a non-admin account.
    async fn update_privileges(
        &self,
        staff: StaffUuid,
        privileges: Privileges,
    ) -> Result<StaffUser, StaffServiceError>;

    /// Flips the active flag of another account.
    async fn toggle_status(
        &self,
        actor: StaffUuid,
        staff: StaffUuid,
    ) -> Result<StaffUser, StaffServiceError>;

    /// Deletes another account.
    async fn delete_staff(
        &self,
        actor: StaffUuid,
        staff: StaffUuid,
    ) -> Result<(), StaffServiceError>;
}
