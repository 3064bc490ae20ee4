//! Authentication framework adapters.

mod credentials;

pub use credentials::CredentialsFramework;
