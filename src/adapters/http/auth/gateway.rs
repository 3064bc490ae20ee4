//! Version-compatibility shim between the framework's produced handler and
//! the host server's function-per-verb contract.
//!
//! The handler shape is resolved exactly once, when the gateway is built; per
//! request the work is a match on the resolved variant. Framework versions
//! that key their verb table differently (uppercase, lowercase, nested one
//! level, generic `handler`/`default` keys) are all served by a fixed-order
//! key probe. A failed initialization degrades every verb to a fixed 500
//! response; the host server never sees a propagated error from this
//! boundary.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use http::Request;

use crate::ports::{AuthFramework, FrameworkConfig, ProducedHandler, VerbHandler, VerbTable};

/// Body of the response served when initialization failed.
const INIT_ERROR_BODY: &str = "Auth initialization error";

/// Handler shape, fixed at startup.
enum Resolved {
    /// A single callable serving every verb.
    Direct(VerbHandler),

    /// A verb-keyed table, probed per request.
    VerbKeyed(VerbTable),

    /// Initialization failed; every verb answers a fixed 500.
    InitFailed,
}

impl std::fmt::Debug for Resolved {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolved::Direct(_) => f.write_str("Direct"),
            Resolved::VerbKeyed(table) => f.debug_tuple("VerbKeyed").field(table).finish(),
            Resolved::InitFailed => f.write_str("InitFailed"),
        }
    }
}

/// Stateless request dispatcher over the resolved handler shape.
#[derive(Debug)]
pub struct AuthGateway {
    resolved: Resolved,
}

impl AuthGateway {
    /// Initialize the framework and cache the resolved handler shape.
    ///
    /// This is infallible by design: an initialization error is logged and
    /// recorded as [`Resolved::InitFailed`] rather than returned, so startup
    /// always yields a servable gateway.
    pub fn initialize(framework: &dyn AuthFramework, config: FrameworkConfig) -> Self {
        let resolved = match framework.initialize(config) {
            Ok(ProducedHandler::Callable(handler)) => {
                tracing::debug!("framework produced a direct callable handler");
                Resolved::Direct(handler)
            }
            Ok(ProducedHandler::VerbMap(table)) => {
                tracing::debug!(?table, "framework produced a verb-keyed handler table");
                Resolved::VerbKeyed(table)
            }
            Err(err) => {
                tracing::error!(error = %err, "framework initialization failed");
                Resolved::InitFailed
            }
        };
        Self { resolved }
    }

    /// Dispatch one request to the resolved handler.
    pub async fn handle(&self, req: Request<Body>) -> Response {
        match &self.resolved {
            Resolved::Direct(handler) => handler(req).await,
            Resolved::VerbKeyed(table) => {
                let method = req.method().as_str().to_uppercase();
                match probe(table, &method) {
                    Some(handler) => handler(req).await,
                    None => {
                        tracing::debug!(method = %method, "no handler key matched");
                        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
                    }
                }
            }
            Resolved::InitFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, INIT_ERROR_BODY).into_response()
            }
        }
    }
}

/// Probe candidate keys in fixed priority order: exact verb, lowercased verb,
/// nested exact, nested lowercased, then the generic fallbacks.
fn probe<'a>(table: &'a VerbTable, method: &str) -> Option<&'a VerbHandler> {
    let lower = method.to_lowercase();
    table
        .entry(method)
        .or_else(|| table.entry(&lower))
        .or_else(|| table.nested_entry(method))
        .or_else(|| table.nested_entry(&lower))
        .or_else(|| table.entry("handler"))
        .or_else(|| table.entry("default"))
}
