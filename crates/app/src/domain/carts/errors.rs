//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::{carts::store::SessionStoreError, catalog::models::ProductUuid};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product {0} not found")]
    ProductNotFound(ProductUuid),

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("session store error")]
    Session(#[from] SessionStoreError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
