//! Application layer services implementing business logic.
//!
//! Services consume the domain's repository traits and provide the API used
//! by HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_store::LinkStore`] - URL mappings and hit counters over a key-value backend

pub mod services;
