//! Auth endpoint: the handler shim and its routes.

mod gateway;
mod routes;

pub use gateway::AuthGateway;
pub use routes::auth_routes;
