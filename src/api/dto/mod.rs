//! Data Transfer Objects for API requests and responses.
//!
//! Field names are PascalCase on the wire (`Url`, `Status`, `Count`,
//! `Days`) to stay compatible with existing clients.

pub mod create;
pub mod health;
pub mod stats;
