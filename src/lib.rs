//! Gatehouse - Credential Sign-In Service
//!
//! This crate implements credential-based sign-in with database-backed user
//! lookup, an in-memory seed fallback, and a version-tolerant adapter between
//! the authentication framework and the hosting HTTP server.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
