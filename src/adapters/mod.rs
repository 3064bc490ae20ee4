//! Adapters - infrastructure implementations of the ports.

pub mod auth;
pub mod framework;
pub mod http;
pub mod postgres;
pub mod seed;
