//! User lookup port.
//!
//! # Contract
//!
//! Implementations must:
//! - Return `Ok(Some(user))` when a record matches the email exactly
//!   (case-sensitive, as stored)
//! - Return `Ok(None)` on a clean miss
//! - Return `Err(LookupError)` only for infrastructure failures; callers
//!   decide whether to fall back or fail

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::auth::UserRecord;

/// Errors a lookup backend can report.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// The backing store rejected or failed the query.
    #[error("User query failed: {0}")]
    QueryFailed(String),

    /// The backing store could not be reached at all.
    #[error("User store unavailable: {0}")]
    Unavailable(String),
}

/// Finds user records by email.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Look up the single user record matching `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LookupError>;
}
