//! Credentials provider - email/password sign-in strategy.
//!
//! This is the provider registered with the framework: it declares the two
//! expected credential fields and delegates `authorize` to the application's
//! verification handler.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::AuthorizeHandler;
use crate::domain::auth::{RawCredentials, SanitizedUser};
use crate::ports::{CredentialField, Provider};

/// Email/password provider backed by [`AuthorizeHandler`].
pub struct CredentialsProvider {
    fields: Vec<CredentialField>,
    authorize_handler: Arc<AuthorizeHandler>,
}

impl CredentialsProvider {
    pub fn new(authorize_handler: Arc<AuthorizeHandler>) -> Self {
        Self {
            // Declared explicitly so sign-in UIs render the right inputs.
            fields: vec![
                CredentialField::new("email", "Email", "email"),
                CredentialField::new("password", "Password", "password"),
            ],
            authorize_handler,
        }
    }
}

#[async_trait]
impl Provider for CredentialsProvider {
    fn id(&self) -> &str {
        "credentials"
    }

    fn fields(&self) -> &[CredentialField] {
        &self.fields
    }

    async fn authorize(&self, credentials: RawCredentials) -> Option<SanitizedUser> {
        self.authorize_handler.handle(credentials).await
    }
}

impl std::fmt::Debug for CredentialsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsProvider")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
