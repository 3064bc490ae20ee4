//! PostgreSQL implementation of UserLookup.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::auth::UserRecord;
use crate::ports::{LookupError, UserLookup};

/// PostgreSQL implementation of UserLookup.
///
/// Runs a single parameterized query against the shared pool. Errors are
/// reported to the caller, which decides whether to fall back.
#[derive(Clone)]
pub struct PostgresUserLookup {
    pool: PgPool,
}

impl PostgresUserLookup {
    /// Creates a new PostgresUserLookup.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLookup for PostgresUserLookup {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LookupError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| LookupError::QueryFailed(e.to_string()))?;

        match row {
            Some(row) => {
                let user = UserRecord {
                    id: row
                        .try_get("id")
                        .map_err(|e| LookupError::QueryFailed(e.to_string()))?,
                    name: row
                        .try_get("name")
                        .map_err(|e| LookupError::QueryFailed(e.to_string()))?,
                    email: row
                        .try_get("email")
                        .map_err(|e| LookupError::QueryFailed(e.to_string()))?,
                    password: row
                        .try_get("password")
                        .map_err(|e| LookupError::QueryFailed(e.to_string()))?,
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for PostgresUserLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresUserLookup").finish_non_exhaustive()
    }
}
