//! Principals Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::auth::models::{NewPrincipal, Principal, PrincipalRecord, PrincipalUuid, Role};

const FIND_PRINCIPAL_BY_TOKEN_HASH_SQL: &str = include_str!("sql/find_principal_by_token_hash.sql");
const CREATE_PRINCIPAL_SQL: &str = include_str!("sql/create_principal.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn find_principal_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Principal>, sqlx::Error> {
        query_as::<Postgres, Principal>(FIND_PRINCIPAL_BY_TOKEN_HASH_SQL)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn create_principal(
        &self,
        principal: &NewPrincipal,
    ) -> Result<PrincipalRecord, sqlx::Error> {
        query_as::<Postgres, PrincipalRecord>(CREATE_PRINCIPAL_SQL)
            .bind(principal.uuid.into_uuid())
            .bind(&principal.name)
            .bind(principal.role.as_str())
            .bind(&principal.token_hash)
            .fetch_one(&self.pool)
            .await
    }
}

fn try_get_role(row: &PgRow) -> Result<Role, sqlx::Error> {
    let role: String = row.try_get("role")?;

    role.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: "role".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Principal {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PrincipalUuid::from_uuid(row.try_get("uuid")?),
            role: try_get_role(row)?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for PrincipalRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: PrincipalUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            role: try_get_role(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
