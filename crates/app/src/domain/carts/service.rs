//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{CartView, CartViewLine, SessionUuid},
            store::SessionStore,
        },
        catalog::{PgCatalogRepository, models::ProductUuid},
    },
};

#[derive(Clone)]
pub struct SessionCartsService {
    db: Db,
    sessions: Arc<dyn SessionStore>,
    catalog_repository: PgCatalogRepository,
}

impl SessionCartsService {
    #[must_use]
    pub fn new(db: Db, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            db,
            sessions,
            catalog_repository: PgCatalogRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for SessionCartsService {
    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<u32, CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        // The product must resolve before the line is created; a cart never
        // references a product the catalog does not know.
        let mut tx = self.db.begin_transaction().await?;

        self.catalog_repository
            .get_product(&mut tx, product, Timestamp::now())
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => CartsServiceError::ProductNotFound(product),
                other => CartsServiceError::Sql(other),
            })?;

        tx.commit().await?;

        let mut cart = self.sessions.load(session).await?;

        cart.add(product, quantity);

        let item_count = cart.item_count();

        self.sessions.save(session, cart).await?;

        Ok(item_count)
    }

    async fn remove_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError> {
        let mut cart = self.sessions.load(session).await?;

        cart.remove(product);

        self.sessions.save(session, cart).await?;

        Ok(())
    }

    async fn get_cart(
        &self,
        session: SessionUuid,
        point_in_time: Timestamp,
    ) -> Result<CartView, CartsServiceError> {
        let cart = self.sessions.load(session).await?;

        let mut tx = self.db.begin_transaction().await?;

        let mut lines = Vec::with_capacity(cart.lines().len());
        let mut total = 0u64;

        for line in cart.lines() {
            let product = self
                .catalog_repository
                .get_product(&mut tx, line.product_uuid, point_in_time)
                .await
                .map_err(|error| match error {
                    sqlx::Error::RowNotFound => {
                        CartsServiceError::ProductNotFound(line.product_uuid)
                    }
                    other => CartsServiceError::Sql(other),
                })?;

            let line_total = product.price * u64::from(line.quantity);

            total += line_total;

            lines.push(CartViewLine {
                product,
                quantity: line.quantity,
                line_total,
            });
        }

        tx.commit().await?;

        Ok(CartView { lines, total })
    }

    async fn item_count(&self, session: SessionUuid) -> Result<u32, CartsServiceError> {
        Ok(self.sessions.load(session).await?.item_count())
    }

    async fn clear(&self, session: SessionUuid) -> Result<(), CartsServiceError> {
        self.sessions.clear(session).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add `quantity` of a product to the session's cart, creating the line
    /// or merging into an existing one. Returns the updated total item
    /// count.
    async fn add_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<u32, CartsServiceError>;

    /// Remove a product's line. A no-op when the line is absent.
    async fn remove_item(
        &self,
        session: SessionUuid,
        product: ProductUuid,
    ) -> Result<(), CartsServiceError>;

    /// The cart with every line resolved against the live catalog.
    async fn get_cart(
        &self,
        session: SessionUuid,
        point_in_time: Timestamp,
    ) -> Result<CartView, CartsServiceError>;

    /// Sum of all line quantities.
    async fn item_count(&self, session: SessionUuid) -> Result<u32, CartsServiceError>;

    /// Empty the session's cart.
    async fn clear(&self, session: SessionUuid) -> Result<(), CartsServiceError>;
}
