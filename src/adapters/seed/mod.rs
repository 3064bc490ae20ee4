//! Seed-data implementation of UserLookup.
//!
//! A fixed in-process user list serving two purposes: local development
//! without a database, and the fallback target when the persistent store is
//! unreachable or has no matching row. The list mirrors the project's seed
//! script, so the development user exists in both places.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use uuid::{uuid, Uuid};

use crate::domain::auth::UserRecord;
use crate::ports::{LookupError, UserLookup};

/// The development user created by the seed script.
///
/// Its password is stored in plaintext here; the verifier's legacy
/// comparison path exists for exactly this dataset.
pub const SEED_USER_EMAIL: &str = "user@nextmail.com";

const SEED_USER_ID: Uuid = uuid!("410544b2-4001-4271-9855-fec4b6a6442a");

static SEED_USERS: Lazy<Vec<UserRecord>> = Lazy::new(|| {
    vec![UserRecord {
        id: SEED_USER_ID,
        name: "User".to_string(),
        email: SEED_USER_EMAIL.to_string(),
        password: "123456".to_string(),
    }]
});

/// In-memory lookup over the seed dataset.
#[derive(Debug, Clone, Default)]
pub struct SeedUserLookup;

impl SeedUserLookup {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserLookup for SeedUserLookup {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LookupError> {
        Ok(SEED_USERS.iter().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_seed_user_by_exact_email() {
        let lookup = SeedUserLookup::new();

        let user = lookup.find_by_email(SEED_USER_EMAIL).await.unwrap();
        let user = user.expect("seed user must exist");
        assert_eq!(user.id, SEED_USER_ID);
        assert_eq!(user.name, "User");
    }

    #[tokio::test]
    async fn unknown_email_is_a_clean_miss() {
        let lookup = SeedUserLookup::new();

        let user = lookup.find_by_email("nobody@nextmail.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn match_is_case_sensitive() {
        let lookup = SeedUserLookup::new();

        let user = lookup.find_by_email("User@Nextmail.com").await.unwrap();
        assert!(user.is_none());
    }
}
