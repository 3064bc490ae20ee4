//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Authentication configuration for the credentials framework
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret handed to the authentication framework.
    /// Defaults to a development value outside production.
    #[serde(default = "default_secret")]
    pub secret: SecretString,

    /// Page the framework redirects unauthenticated users to
    #[serde(default = "default_sign_in_page")]
    pub sign_in_page: String,

    /// Whether to trust the Host header from the reverse proxy
    #[serde(default = "default_trust_host")]
    pub trust_host: bool,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production the secret must be set explicitly; the development
    /// default is rejected. The sign-in page must be an absolute path.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_SECRET"));
        }
        if *environment == Environment::Production && secret == DEV_SECRET {
            return Err(ValidationError::SecretRequiredInProduction);
        }
        if !self.sign_in_page.starts_with('/') {
            return Err(ValidationError::InvalidSignInPage);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            sign_in_page: default_sign_in_page(),
            trust_host: default_trust_host(),
        }
    }
}

const DEV_SECRET: &str = "dev-secret";

fn default_secret() -> SecretString {
    SecretString::new(DEV_SECRET.to_string())
}

fn default_sign_in_page() -> String {
    "/login".to_string()
}

fn default_trust_host() -> bool {
    true
}
