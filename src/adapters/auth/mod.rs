//! Authentication provider adapters.

mod provider;

pub use provider::CredentialsProvider;
