//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartLine, CartLineUuid},
            quantity::Quantity,
            repository::PgCartLinesRepository,
        },
        customers::models::CustomerUuid,
        products::models::ProductUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartLinesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartLinesRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_cart(&self, customer: CustomerUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let lines = self.repository.list_lines(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(Cart::new(customer, lines))
    }

    async fn add_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<CartLine, CartsServiceError> {
        let quantity = Quantity::parse(quantity)?;

        let mut tx = self.db.begin().await?;

        let snapshot = self.repository.get_product(&mut tx, product).await?;

        if !snapshot.is_active {
            return Err(CartsServiceError::ProductUnavailable);
        }

        if quantity.get() > snapshot.quantity {
            return Err(CartsServiceError::InsufficientStock {
                requested: quantity.get(),
                available: snapshot.quantity,
            });
        }

        let line = self
            .repository
            .upsert_line(&mut tx, customer, product, quantity.get(), snapshot.quantity)
            .await?;

        let Some(line) = line else {
            let existing = self
                .repository
                .find_line_quantity(&mut tx, customer, product)
                .await?;

            debug!(%customer, %product, existing, %quantity, "add to cart exceeds stock");

            return Err(CartsServiceError::InsufficientStock {
                requested: quantity.get(),
                available: snapshot.quantity.saturating_sub(existing),
            });
        };

        let line = self.repository.get_line(&mut tx, customer, line).await?;

        tx.commit().await?;

        info!(%customer, %product, line = %line.uuid, quantity = line.quantity, "added to cart");

        Ok(line)
    }

    async fn update_item(
        &self,
        customer: CustomerUuid,
        line: CartLineUuid,
        quantity: i64,
    ) -> Result<CartLine, CartsServiceError> {
        let quantity = Quantity::parse(quantity)?;

        let mut tx = self.db.begin().await?;

        let current = self.repository.get_line(&mut tx, customer, line).await?;

        if quantity.get() > current.product.quantity {
            return Err(CartsServiceError::InsufficientStock {
                requested: quantity.get(),
                available: current.product.quantity,
            });
        }

        let rows_affected = self
            .repository
            .update_line_quantity(&mut tx, customer, line, quantity.get())
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        let updated = self.repository.get_line(&mut tx, customer, line).await?;

        tx.commit().await?;

        info!(%customer, %line, %quantity, "updated cart line");

        Ok(updated)
    }

    async fn remove_item(
        &self,
        customer: CustomerUuid,
        line: CartLineUuid,
    ) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_line(&mut tx, customer, line).await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(%customer, %line, "removed cart line");

        Ok(())
    }

    async fn clear_cart(&self, customer: CustomerUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let removed = self.repository.clear_lines(&mut tx, customer).await?;

        tx.commit().await?;

        info!(%customer, removed, "cleared cart");

        Ok(removed)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Every line in the customer's cart with its product, and the total at current prices.
    async fn list_cart(&self, customer: CustomerUuid) -> Result<Cart, CartsServiceError>;

    /// Add units of a product, growing the existing line when there is one.
    ///
    /// Fails without touching the cart when the product is missing or inactive, or when the
    /// resulting line quantity would exceed the product's stock.
    async fn add_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<CartLine, CartsServiceError>;

    /// Replace a line's quantity. Lines of other customers are reported as not found.
    async fn update_item(
        &self,
        customer: CustomerUuid,
        line: CartLineUuid,
        quantity: i64,
    ) -> Result<CartLine, CartsServiceError>;

    async fn remove_item(
        &self,
        customer: CustomerUuid,
        line: CartLineUuid,
    ) -> Result<(), CartsServiceError>;

    /// Remove every line, returning how many were removed. An empty cart is not an error.
    async fn clear_cart(&self, customer: CustomerUuid) -> Result<u64, CartsServiceError>;
}
