//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`hit_aggregator`] - Day-of-year bucketing of hit counters
//! - [`clock`] - Injectable time source
//! - [`keys`] - Backend key naming
//! - [`error`] - Store and backend error types
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure and
//!   application layers

pub mod clock;
pub mod entities;
pub mod error;
pub mod hit_aggregator;
pub mod keys;
pub mod repositories;
