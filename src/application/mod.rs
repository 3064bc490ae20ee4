//! Application layer - use-case handlers orchestrating domain and ports.

mod authorize;

pub use authorize::AuthorizeHandler;
