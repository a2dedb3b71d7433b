//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (moka and no-op implementations)
//! - [`persistence`] - Redis and in-memory key-value backends

pub mod cache;
pub mod persistence;
