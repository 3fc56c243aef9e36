//! Session-scoped cart storage.
//!
//! Carts never touch the relational store. They live in whatever key-value
//! session backend hosts the deployment, injected behind [`SessionStore`];
//! the domain logic only sees `load`/`save`/`clear` keyed by session UUID.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::carts::models::{Cart, SessionUuid};

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session store backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the cart for a session; a session with no saved cart gets an
    /// empty one.
    async fn load(&self, session: SessionUuid) -> Result<Cart, SessionStoreError>;

    /// Persist the cart for a session.
    async fn save(&self, session: SessionUuid, cart: Cart) -> Result<(), SessionStoreError>;

    /// Drop the session's cart entirely.
    async fn clear(&self, session: SessionUuid) -> Result<(), SessionStoreError>;
}

/// In-process session store.
///
/// Carts are strictly per-principal, so a plain map behind an async lock is
/// enough; there is no cross-session coordination to worry about.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    carts: RwLock<FxHashMap<SessionUuid, Cart>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session: SessionUuid) -> Result<Cart, SessionStoreError> {
        Ok(self
            .carts
            .read()
            .await
            .get(&session)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, session: SessionUuid, cart: Cart) -> Result<(), SessionStoreError> {
        self.carts.write().await.insert(session, cart);

        Ok(())
    }

    async fn clear(&self, session: SessionUuid) -> Result<(), SessionStoreError> {
        self.carts.write().await.remove(&session);

        Ok(())
    }
}
