//! PostgreSQL adapters.

mod user_lookup;

pub use user_lookup::PostgresUserLookup;
