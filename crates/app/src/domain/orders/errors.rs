//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{
    auth::models::Role,
    domain::{
        carts::store::SessionStoreError, catalog::models::ProductUuid,
        orders::status::OrderStatus,
    },
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("product {0} not found")]
    ProductNotFound(ProductUuid),

    #[error("order not found")]
    NotFound,

    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("operation requires the {0} role")]
    RoleRequired(Role),

    #[error("session store error")]
    Session(#[from] SessionStoreError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
