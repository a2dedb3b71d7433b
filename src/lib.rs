//! # Redis Shortener
//!
//! A URL shortening service with deterministic short codes and per-day hit
//! counters, built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Hit records, day-of-year aggregation, clock and storage traits
//! - **Application Layer** ([`application`]) - [`application::services::LinkStore`], the store built on a key-value backend
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory backends, lookup cache
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Short Codes
//!
//! A short code is the CRC-32 of the long URL written in base 62 (see
//! [`utils::code_generator`]). Codes are not random: saving the same URL twice
//! yields the same code, and colliding URLs overwrite each other.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//! cargo run
//!
//! curl -d '{"Url": "http://www.nationalreview.com"}' localhost:8080/create
//! # {"Url":"bs1I92"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkStore;
    pub use crate::domain::clock::{Clock, FixedClock, SystemClock};
    pub use crate::domain::entities::HitRecord;
    pub use crate::domain::error::StoreError;
    pub use crate::domain::repositories::{KvBackend, UrlStore};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
