//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::auth::{
    errors::AuthServiceError,
    models::{NewPrincipal, Principal, PrincipalRecord},
    repository::PgAuthRepository,
    token::hash_token,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Register a new principal.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` on a duplicate UUID or token hash, or a
    /// storage error when the insert fails.
    pub async fn create_principal(
        &self,
        principal: NewPrincipal,
    ) -> Result<PrincipalRecord, AuthServiceError> {
        self.repository
            .create_principal(&principal)
            .await
            .map_err(AuthServiceError::from)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        self.repository
            .find_principal_by_token_hash(&hash_token(bearer_token))
            .await
            .map_err(AuthServiceError::from)?
            .ok_or(AuthServiceError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a raw bearer token to the principal that owns it.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;
}
