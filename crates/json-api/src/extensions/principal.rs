//! Authenticated principal depot helpers.

use salvo::prelude::{Depot, StatusError};

use prato_app::{
    auth::models::{Principal, Role},
    domain::carts::models::SessionUuid,
};

/// Access to the principal placed in the depot by the auth middleware.
pub(crate) trait PrincipalExt {
    fn insert_principal(&mut self, principal: Principal);

    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    /// The principal, rejected with 403 unless it holds `role`.
    fn principal_with_role_or_403(&self, role: Role) -> Result<Principal, StatusError>;

    /// The cart session key for the authenticated principal.
    fn session_uuid_or_401(&self) -> Result<SessionUuid, StatusError>;
}

impl PrincipalExt for Depot {
    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.obtain::<Principal>()
            .cloned()
            .map_err(|_ignored| StatusError::unauthorized())
    }

    fn principal_with_role_or_403(&self, role: Role) -> Result<Principal, StatusError> {
        let principal = self.principal_or_401()?;

        if principal.role != role {
            return Err(
                StatusError::forbidden().brief(format!("Operation requires the {role} role"))
            );
        }

        Ok(principal)
    }

    fn session_uuid_or_401(&self) -> Result<SessionUuid, StatusError> {
        self.principal_or_401()
            .map(|principal| SessionUuid::from_uuid(principal.uuid.into_uuid()))
    }
}
