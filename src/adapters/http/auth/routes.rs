//! HTTP routes for the auth endpoint.
//!
//! Every verb on the endpoint (and any sub-path under it) delegates to the
//! gateway; method filtering is the gateway's job, not the router's.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use http::Request;

use super::gateway::AuthGateway;

/// Creates the auth router. Mount it under the auth endpoint path
/// (e.g. `/api/auth`).
pub fn auth_routes(gateway: Arc<AuthGateway>) -> Router {
    let verbs = get(dispatch)
        .post(dispatch)
        .put(dispatch)
        .delete(dispatch)
        .options(dispatch)
        .head(dispatch);

    Router::new()
        .route("/", verbs.clone())
        .route("/*rest", verbs)
        .with_state(gateway)
}

async fn dispatch(State(gateway): State<Arc<AuthGateway>>, req: Request<Body>) -> Response {
    gateway.handle(req).await
}
