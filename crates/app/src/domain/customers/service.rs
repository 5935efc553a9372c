//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::customers::{
        data::{CustomerFilter, CustomerUpdate, NewCustomer},
        errors::CustomersServiceError,
        models::{Customer, CustomerUuid},
        repository::PgCustomersRepository,
    },
    pagination::{Page, PageRequest},
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn list_customers(
        &self,
        filter: CustomerFilter,
        page: PageRequest,
    ) -> Result<Page<Customer>, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let items = self
            .repository
            .list_customers(&mut tx, &filter, page)
            .await?;

        let total = self.repository.count_customers(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(Page::new(items, total, page))
    }

    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_customer(&mut tx, customer).await?;

        tx.commit().await?;

        info!(customer = %created.uuid, "created customer");

        Ok(created)
    }

    async fn update_profile(
        &self,
        customer: CustomerUuid,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_customer(&mut tx, customer, update)
            .await?;

        tx.commit().await?;

        info!(%customer, "updated customer profile");

        Ok(updated)
    }

    async fn toggle_status(
        &self,
        customer: CustomerUuid,
    ) -> Result<Customer, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let toggled = self.repository.toggle_status(&mut tx, customer).await?;

        tx.commit().await?;

        info!(%customer, is_active = toggled.is_active, "toggled customer status");

        Ok(toggled)
    }

    async fn delete_customer(&self, customer: CustomerUuid) -> Result<(), CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_customer(&mut tx, customer).await?;

        if rows_affected == 0 {
            return Err(CustomersServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%customer, "deleted customer");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves one page of customers, newest first.
    async fn list_customers(
        &self,
        filter: CustomerFilter,
        page: PageRequest,
    ) -> Result<Page<Customer>, CustomersServiceError>;

    async fn get_customer(&self, customer: CustomerUuid)
    -> Result<Customer, CustomersServiceError>;

    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<Customer, CustomersServiceError>;

    /// Replaces the name, email and contact number. The active flag is untouched.
    async fn update_profile(
        &self,
        customer: CustomerUuid,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomersServiceError>;

    /// Flips the active flag. Inactive customers cannot authenticate.
    async fn toggle_status(&self, customer: CustomerUuid)
    -> Result<Customer, CustomersServiceError>;

    /// Deletes a customer along with their cart and API tokens.
    async fn delete_customer(&self, customer: CustomerUuid) -> Result<(), CustomersServiceError>;
}
