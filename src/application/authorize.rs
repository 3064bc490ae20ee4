//! Credential verification use case.
//!
//! This is the `authorize` operation the credentials provider exposes to the
//! framework. Failure semantics are deliberate: every internal error path
//! converges to `None` ("authentication denied"), nothing is ever propagated
//! across the framework boundary, and log calls carry only pre-formatted
//! fields so logging can never change the outcome.

use std::sync::Arc;

use crate::domain::auth::{
    verify_password, RawCredentials, SanitizedUser, UserRecord, ValidatedCredentials,
};
use crate::ports::UserLookup;

/// Verifies submitted credentials against the user store.
///
/// Holds an optional persistent-store lookup and a mandatory seed fallback.
/// The store is `None` in fallback-only mode (no database configured).
pub struct AuthorizeHandler {
    store: Option<Arc<dyn UserLookup>>,
    seed: Arc<dyn UserLookup>,
}

impl AuthorizeHandler {
    pub fn new(store: Option<Arc<dyn UserLookup>>, seed: Arc<dyn UserLookup>) -> Self {
        Self { store, seed }
    }

    /// Validate, look up, and verify. `None` means authentication denied.
    pub async fn handle(&self, credentials: RawCredentials) -> Option<SanitizedUser> {
        let validated = match ValidatedCredentials::try_from(credentials) {
            Ok(validated) => validated,
            Err(err) => {
                tracing::debug!(error = %err, "credential validation failed");
                return None;
            }
        };

        let user = self.find_user(validated.email()).await?;

        if verify_password(validated.password(), &user.password) {
            tracing::info!(user_id = %user.id, email = %user.email, "credentials verified");
            Some(SanitizedUser::from(&user))
        } else {
            tracing::info!(email = %user.email, "password mismatch");
            None
        }
    }

    /// Chained lookup: persistent store first (when configured), seed data on
    /// store failure or miss. A store error is recovered here, never surfaced.
    async fn find_user(&self, email: &str) -> Option<UserRecord> {
        if let Some(store) = &self.store {
            match store.find_by_email(email).await {
                Ok(Some(user)) => {
                    tracing::debug!(email, user_id = %user.id, "store lookup found user");
                    return Some(user);
                }
                Ok(None) => {
                    tracing::debug!(email, "store returned no user, trying seed data");
                }
                Err(err) => {
                    tracing::warn!(email, error = %err, "store lookup failed, trying seed data");
                }
            }
        }

        match self.seed.find_by_email(email).await {
            Ok(found) => {
                tracing::debug!(email, found = found.is_some(), "seed lookup");
                found
            }
            Err(err) => {
                tracing::warn!(email, error = %err, "seed lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    use crate::ports::LookupError;

    /// Mock lookup that counts calls and serves a fixed outcome.
    struct MockLookup {
        outcome: Result<Option<UserRecord>, LookupError>,
        calls: AtomicUsize,
    }

    impl MockLookup {
        fn with_user(user: UserRecord) -> Self {
            Self {
                outcome: Ok(Some(user)),
                calls: AtomicUsize::new(0),
            }
        }

        fn empty() -> Self {
            Self {
                outcome: Ok(None),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                outcome: Err(LookupError::Unavailable("connection refused".to_string())),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UserLookup for MockLookup {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(Some(user)) if user.email == email => Ok(Some(user.clone())),
                Ok(_) => Ok(None),
                Err(err) => Err(err.clone()),
            }
        }
    }

    fn user_with_password(password: &str) -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            name: "User".to_string(),
            email: "user@nextmail.com".to_string(),
            password: password.to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> RawCredentials {
        RawCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn invalid_email_denied_without_touching_store() {
        let store = Arc::new(MockLookup::with_user(user_with_password("123456")));
        let seed = Arc::new(MockLookup::empty());
        let handler = AuthorizeHandler::new(Some(store.clone()), seed.clone());

        let result = handler.handle(credentials("not-an-email", "123456")).await;

        assert!(result.is_none());
        assert_eq!(store.call_count(), 0);
        assert_eq!(seed.call_count(), 0);
    }

    #[tokio::test]
    async fn short_password_denied_without_touching_store() {
        let store = Arc::new(MockLookup::with_user(user_with_password("123456")));
        let seed = Arc::new(MockLookup::empty());
        let handler = AuthorizeHandler::new(Some(store.clone()), seed);

        let result = handler.handle(credentials("user@nextmail.com", "12345")).await;

        assert!(result.is_none());
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn bcrypt_stored_hash_matches_correct_password() {
        let hash = bcrypt::hash("123456", 4).unwrap();
        let user = user_with_password(&hash);
        let expected_id = user.id;
        let store = Arc::new(MockLookup::with_user(user));
        let seed = Arc::new(MockLookup::empty());
        let handler = AuthorizeHandler::new(Some(store), seed);

        let result = handler.handle(credentials("user@nextmail.com", "123456")).await;

        let sanitized = result.expect("correct password must authorize");
        assert_eq!(sanitized.id, expected_id);
        assert_eq!(sanitized.email, "user@nextmail.com");
    }

    #[tokio::test]
    async fn bcrypt_stored_hash_rejects_wrong_password() {
        let hash = bcrypt::hash("123456", 4).unwrap();
        let store = Arc::new(MockLookup::with_user(user_with_password(&hash)));
        let seed = Arc::new(MockLookup::empty());
        let handler = AuthorizeHandler::new(Some(store), seed);

        let result = handler.handle(credentials("user@nextmail.com", "654321")).await;

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn store_failure_falls_back_to_seed() {
        let store = Arc::new(MockLookup::failing());
        let seed = Arc::new(MockLookup::with_user(user_with_password("123456")));
        let handler = AuthorizeHandler::new(Some(store.clone()), seed.clone());

        let result = handler.handle(credentials("user@nextmail.com", "123456")).await;

        assert!(result.is_some());
        assert_eq!(store.call_count(), 1);
        assert_eq!(seed.call_count(), 1);
    }

    #[tokio::test]
    async fn store_failure_and_store_miss_produce_identical_outcomes() {
        let seed_user = user_with_password("123456");

        let failing = AuthorizeHandler::new(
            Some(Arc::new(MockLookup::failing())),
            Arc::new(MockLookup::with_user(seed_user.clone())),
        );
        let missing = AuthorizeHandler::new(
            Some(Arc::new(MockLookup::empty())),
            Arc::new(MockLookup::with_user(seed_user)),
        );

        let via_failure = failing.handle(credentials("user@nextmail.com", "123456")).await;
        let via_miss = missing.handle(credentials("user@nextmail.com", "123456")).await;

        assert_eq!(via_failure, via_miss);
        assert!(via_failure.is_some());
    }

    #[tokio::test]
    async fn store_hit_never_consults_seed() {
        let store = Arc::new(MockLookup::with_user(user_with_password("123456")));
        let seed = Arc::new(MockLookup::with_user(user_with_password("different")));
        let handler = AuthorizeHandler::new(Some(store), seed.clone());

        let result = handler.handle(credentials("user@nextmail.com", "123456")).await;

        assert!(result.is_some());
        assert_eq!(seed.call_count(), 0);
    }

    #[tokio::test]
    async fn fallback_only_mode_serves_seed_users() {
        let seed = Arc::new(MockLookup::with_user(user_with_password("123456")));
        let handler = AuthorizeHandler::new(None, seed);

        let result = handler.handle(credentials("user@nextmail.com", "123456")).await;

        assert!(result.is_some());
    }

    #[tokio::test]
    async fn unknown_user_is_denied() {
        let handler = AuthorizeHandler::new(None, Arc::new(MockLookup::empty()));

        let result = handler.handle(credentials("nobody@nextmail.com", "123456")).await;

        assert!(result.is_none());
    }
}
