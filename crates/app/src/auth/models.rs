//! Principal models.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Principal UUID
pub type PrincipalUuid = TypedUuid<Principal>;

/// The role claim carried by an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Restaurant,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Restaurant => "restaurant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unrecognized role: {0}")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "restaurant" => Ok(Self::Restaurant),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// An authenticated actor: who they are and what role they hold.
///
/// Core operations take the principal explicitly; nothing in the domain
/// layer reaches back into the request for identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub uuid: PrincipalUuid,
    pub role: Role,
}

impl Principal {
    #[must_use]
    pub const fn new(uuid: PrincipalUuid, role: Role) -> Self {
        Self { uuid, role }
    }
}

/// New principal persistence payload.
#[derive(Debug, Clone)]
pub struct NewPrincipal {
    pub uuid: PrincipalUuid,
    pub name: String,
    pub role: Role,
    pub token_hash: String,
}

/// Principal metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct PrincipalRecord {
    pub uuid: PrincipalUuid,
    pub name: String,
    pub role: Role,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Customer, Role::Restaurant] {
            let parsed: Role = role.as_str().parse().expect("role should parse");

            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn unknown_role_fails_to_parse() {
        assert!("admin".parse::<Role>().is_err());
    }
}
