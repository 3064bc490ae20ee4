//! Gatehouse service entry point.

use std::sync::Arc;

use axum::Router;
use http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use gatehouse::adapters::auth::CredentialsProvider;
use gatehouse::adapters::framework::CredentialsFramework;
use gatehouse::adapters::http::{auth_routes, AuthGateway};
use gatehouse::adapters::postgres::PostgresUserLookup;
use gatehouse::adapters::seed::SeedUserLookup;
use gatehouse::application::AuthorizeHandler;
use gatehouse::config::{AppConfig, ServerConfig};
use gatehouse::ports::{Callbacks, FrameworkConfig, Pages, Provider, UserLookup};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;

    let store = persistent_store(&config);
    let seed: Arc<dyn UserLookup> = Arc::new(SeedUserLookup::new());
    let authorize_handler = Arc::new(AuthorizeHandler::new(store, seed));
    let provider: Arc<dyn Provider> = Arc::new(CredentialsProvider::new(authorize_handler));

    let framework_config = FrameworkConfig {
        pages: Pages {
            sign_in: config.auth.sign_in_page.clone(),
        },
        secret: config.auth.secret.clone(),
        trust_host: config.auth.trust_host,
        callbacks: Callbacks::default(),
        providers: vec![provider],
    };

    let framework = CredentialsFramework::new();
    let gateway = Arc::new(AuthGateway::initialize(&framework, framework_config));

    let app = Router::new()
        .nest("/api/auth", auth_routes(gateway))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "starting gatehouse");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the optional persistent-store lookup.
///
/// A missing URL or a client that cannot be initialized both yield `None`
/// (fallback-only mode); connectivity problems surface later, per query, and
/// the verifier recovers from those too.
fn persistent_store(config: &AppConfig) -> Option<Arc<dyn UserLookup>> {
    let url = match &config.database.url {
        Some(url) => url,
        None => {
            tracing::info!("no database URL configured, serving seed users only");
            return None;
        }
    };

    match PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect_lazy(url)
    {
        Ok(pool) => {
            tracing::info!("persistent user store configured");
            Some(Arc::new(PostgresUserLookup::new(pool)))
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not initialize store client, serving seed users only");
            None
        }
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
