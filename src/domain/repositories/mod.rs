//! Repository trait definitions for the domain layer.
//!
//! Storage is modelled as two layers:
//!
//! - [`KvBackend`] - the narrow capability set a key-value store must offer
//!   (string keys plus hashes of integer counters)
//! - [`UrlStore`] - the business contract used by HTTP handlers, implemented
//!   once in [`crate::application::services::LinkStore`] on top of any
//!   [`KvBackend`]
//!
//! Backends live in `crate::infrastructure::persistence`. Mock implementations
//! of both traits are generated via `mockall` for testing.

pub mod kv_backend;
pub mod url_store;

pub use kv_backend::KvBackend;
pub use url_store::UrlStore;

#[cfg(test)]
pub use kv_backend::MockKvBackend;
#[cfg(test)]
pub use url_store::MockUrlStore;
