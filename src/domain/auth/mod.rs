//! Authentication domain types.
//!
//! These types are provider-independent: any lookup adapter (PostgreSQL,
//! seed data) can populate a [`UserRecord`], and the framework only ever
//! sees a [`SanitizedUser`].

mod credentials;
mod password;
mod user;

pub use credentials::{CredentialsError, RawCredentials, ValidatedCredentials};
pub use password::verify_password;
pub use user::{SanitizedUser, UserRecord};
