//! Ports - trait boundaries between the application core and adapters.

mod framework;
mod provider;
mod user_lookup;

pub use framework::{
    AuthFramework, Callbacks, FrameworkConfig, InitError, Pages, ProducedHandler, VerbHandler,
    VerbTable,
};
pub use provider::{CredentialField, Provider};
pub use user_lookup::{LookupError, UserLookup};
