//! In-crate implementation of the framework boundary.
//!
//! `CredentialsFramework` is the production implementation of the
//! [`AuthFramework`] port. It validates the configuration once, then
//! produces a verb-keyed handler table:
//!
//! - `GET` answers provider metadata (ids, declared fields, sign-in page)
//! - `POST` runs a sign-in attempt through the first registered provider
//!
//! Session and token materialization are out of scope here; a successful
//! sign-in answers the sanitized user and nothing else.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::domain::auth::{RawCredentials, SanitizedUser};
use crate::ports::{
    AuthFramework, Callbacks, FrameworkConfig, InitError, ProducedHandler, Provider, VerbHandler,
    VerbTable,
};

/// Largest accepted sign-in request body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Production framework adapter for credential sign-in.
#[derive(Debug, Clone, Default)]
pub struct CredentialsFramework;

impl CredentialsFramework {
    pub fn new() -> Self {
        Self
    }
}

impl AuthFramework for CredentialsFramework {
    fn initialize(&self, config: FrameworkConfig) -> Result<ProducedHandler, InitError> {
        if config.providers.is_empty() {
            return Err(InitError::NoProviders);
        }
        if config.secret.expose_secret().is_empty() {
            return Err(InitError::EmptySecret);
        }

        tracing::info!(
            providers = config.providers.len(),
            sign_in_page = %config.pages.sign_in,
            trust_host = config.trust_host,
            "auth framework initialized"
        );

        let table = VerbTable::new()
            .with_entry("GET", metadata_handler(&config))
            .with_entry("POST", sign_in_handler(&config));

        Ok(ProducedHandler::VerbMap(table))
    }
}

#[derive(Debug, Serialize)]
struct ProviderMetadata {
    id: String,
    fields: Vec<crate::ports::CredentialField>,
}

#[derive(Debug, Serialize)]
struct MetadataResponse {
    providers: Vec<ProviderMetadata>,
    sign_in_page: String,
}

#[derive(Debug, Serialize)]
struct SignInResponse {
    user: SanitizedUser,
}

#[derive(Debug, Serialize)]
struct SignInErrorResponse {
    error: &'static str,
}

fn metadata_handler(config: &FrameworkConfig) -> VerbHandler {
    let providers: Vec<ProviderMetadata> = config
        .providers
        .iter()
        .map(|p| ProviderMetadata {
            id: p.id().to_string(),
            fields: p.fields().to_vec(),
        })
        .collect();
    let response = Arc::new(MetadataResponse {
        providers,
        sign_in_page: config.pages.sign_in.clone(),
    });

    Arc::new(move |_req| {
        let response = response.clone();
        Box::pin(async move { (StatusCode::OK, Json(&*response)).into_response() })
    })
}

fn sign_in_handler(config: &FrameworkConfig) -> VerbHandler {
    let provider = config.providers[0].clone();
    let callbacks = config.callbacks.clone();

    Arc::new(move |req| {
        let provider = provider.clone();
        let callbacks = callbacks.clone();
        Box::pin(async move { sign_in(provider, callbacks, req).await })
    })
}

async fn sign_in(
    provider: Arc<dyn Provider>,
    callbacks: Callbacks,
    req: axum::http::Request<Body>,
) -> Response {
    let body = match to_bytes(req.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::debug!(error = %err, "failed to read sign-in body");
            return (
                StatusCode::BAD_REQUEST,
                Json(SignInErrorResponse {
                    error: "MalformedRequest",
                }),
            )
                .into_response();
        }
    };

    let credentials: RawCredentials = match serde_json::from_slice(&body) {
        Ok(credentials) => credentials,
        Err(err) => {
            tracing::debug!(error = %err, "sign-in body is not valid credentials JSON");
            return (
                StatusCode::BAD_REQUEST,
                Json(SignInErrorResponse {
                    error: "MalformedRequest",
                }),
            )
                .into_response();
        }
    };

    match provider.authorize(credentials).await {
        Some(user) => {
            if (callbacks.sign_in)(&user) {
                (StatusCode::OK, Json(SignInResponse { user })).into_response()
            } else {
                tracing::info!(email = %user.email, "sign-in denied by callback");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(SignInErrorResponse {
                        error: "AccessDenied",
                    }),
                )
                    .into_response()
            }
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(SignInErrorResponse {
                error: "CredentialsSignin",
            }),
        )
            .into_response(),
    }
}
