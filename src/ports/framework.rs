//! Authentication framework boundary.
//!
//! The framework consumes a [`FrameworkConfig`] and produces an opaque
//! request handler. Across framework versions that handler has taken two
//! shapes: a single callable, or a table of per-verb callables (sometimes
//! nested one level, sometimes keyed in lowercase, sometimes with generic
//! fallback keys). [`ProducedHandler`] captures both shapes as an explicit
//! tagged union so the HTTP shim resolves the shape once at startup instead
//! of re-probing on every request.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::response::Response;
use futures::future::BoxFuture;
use http::Request;
use secrecy::SecretString;
use thiserror::Error;

use super::Provider;
use crate::domain::auth::SanitizedUser;

/// A request handler for one HTTP verb (or for all of them, shape A).
pub type VerbHandler = Arc<dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;

/// Pages the framework should use for redirects.
#[derive(Debug, Clone)]
pub struct Pages {
    /// Path of the sign-in page (e.g. "/login").
    pub sign_in: String,
}

/// Hooks the host application registers with the framework.
#[derive(Clone)]
pub struct Callbacks {
    /// Invoked after a successful authorize; returning `false` denies the
    /// sign-in. The default logs the attempt and allows it.
    pub sign_in: Arc<dyn Fn(&SanitizedUser) -> bool + Send + Sync>,

    /// Route-guard policy: given the signed-in user (if any) and a request
    /// path, decide whether access is allowed.
    pub authorized: Arc<dyn Fn(Option<&SanitizedUser>, &str) -> bool + Send + Sync>,
}

impl Default for Callbacks {
    fn default() -> Self {
        Self {
            sign_in: Arc::new(|user| {
                tracing::info!(user_id = %user.id, email = %user.email, "sign-in callback");
                true
            }),
            // The dashboard requires authentication; everything else
            // (including the sign-in page itself) is open.
            authorized: Arc::new(|user, path| {
                if path.starts_with("/dashboard") {
                    user.is_some()
                } else {
                    true
                }
            }),
        }
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

/// Configuration handed to the framework at initialization.
#[derive(Clone)]
pub struct FrameworkConfig {
    pub pages: Pages,
    pub secret: SecretString,
    pub trust_host: bool,
    pub callbacks: Callbacks,
    pub providers: Vec<Arc<dyn Provider>>,
}

impl std::fmt::Debug for FrameworkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameworkConfig")
            .field("pages", &self.pages)
            .field("trust_host", &self.trust_host)
            .field("providers", &self.providers.len())
            .finish_non_exhaustive()
    }
}

/// Table of per-verb handlers, with an optional nested sub-table.
///
/// Keys are arbitrary strings: framework versions have used uppercase verbs,
/// lowercase verbs, and the generic keys `handler` and `default`.
#[derive(Clone, Default)]
pub struct VerbTable {
    entries: HashMap<String, VerbHandler>,
    nested: HashMap<String, VerbHandler>,
}

impl VerbTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level handler under `key`.
    pub fn with_entry(mut self, key: impl Into<String>, handler: VerbHandler) -> Self {
        self.entries.insert(key.into(), handler);
        self
    }

    /// Register a handler in the nested sub-table under `key`.
    pub fn with_nested(mut self, key: impl Into<String>, handler: VerbHandler) -> Self {
        self.nested.insert(key.into(), handler);
        self
    }

    pub fn entry(&self, key: &str) -> Option<&VerbHandler> {
        self.entries.get(key)
    }

    pub fn nested_entry(&self, key: &str) -> Option<&VerbHandler> {
        self.nested.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.nested.is_empty()
    }
}

impl std::fmt::Debug for VerbTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerbTable")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .field("nested", &self.nested.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// What the framework hands back from initialization.
#[derive(Clone)]
pub enum ProducedHandler {
    /// Shape A: one callable serving every verb.
    Callable(VerbHandler),

    /// Shape B: a verb-keyed table.
    VerbMap(VerbTable),
}

impl std::fmt::Debug for ProducedHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProducedHandler::Callable(_) => f.write_str("ProducedHandler::Callable"),
            ProducedHandler::VerbMap(table) => {
                f.debug_tuple("ProducedHandler::VerbMap").field(table).finish()
            }
        }
    }
}

/// Why framework initialization was refused.
#[derive(Debug, Clone, Error)]
pub enum InitError {
    #[error("No providers configured")]
    NoProviders,

    #[error("Auth secret is empty")]
    EmptySecret,

    #[error("Framework initialization failed: {0}")]
    Internal(String),
}

/// Produces a request handler from a framework configuration.
///
/// Initialization runs once per process; the result is cached by the HTTP
/// shim. An error here must never crash the host — the shim degrades to a
/// fixed 500 response instead.
pub trait AuthFramework: Send + Sync {
    fn initialize(&self, config: FrameworkConfig) -> Result<ProducedHandler, InitError>;
}
