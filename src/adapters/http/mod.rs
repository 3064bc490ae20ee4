//! HTTP adapters - REST surface of the service.

pub mod auth;

// Re-export key types for convenience
pub use auth::auth_routes;
pub use auth::AuthGateway;
