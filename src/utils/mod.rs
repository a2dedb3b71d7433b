//! Utility functions.
//!
//! - [`code_generator`] - Checksum-based short code generation

pub mod code_generator;
