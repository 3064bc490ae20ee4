//! Authentication provider port.
//!
//! A provider is a pluggable sign-in strategy registered with the framework.
//! This service ships one implementation (the credentials provider), but the
//! framework boundary only sees this trait.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::auth::{RawCredentials, SanitizedUser};

/// Declaration of a credential input field, surfaced to sign-in UIs.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub input_type: String,
}

impl CredentialField {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        input_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            input_type: input_type.into(),
        }
    }
}

/// A sign-in strategy the framework can drive.
///
/// # Contract
///
/// `authorize` must never panic or return an error: every failure mode maps
/// to `None`, which the framework reports as "authentication denied".
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier for this provider (e.g. "credentials").
    fn id(&self) -> &str;

    /// The credential fields this provider expects.
    fn fields(&self) -> &[CredentialField];

    /// Verify submitted credentials, returning the sanitized user on success.
    async fn authorize(&self, credentials: RawCredentials) -> Option<SanitizedUser>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_field_serializes_with_type_key() {
        let field = CredentialField::new("email", "Email", "email");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["name"], "email");
        assert_eq!(json["type"], "email");
    }

    #[test]
    fn provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn Provider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn Provider>>();
    }
}
