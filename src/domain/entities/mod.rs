//! Core domain entities.
//!
//! - [`HitRecord`] - Aggregated total and per-day hit counters for a short code

pub mod hit_record;

pub use hit_record::HitRecord;
