//! Validation utilities
//!
//! Re-reads a written bundle and checks its block structure

mod bundle;

pub use bundle::{validate_bundle, validate_export};
