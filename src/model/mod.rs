//! Data model for the export list

mod manifest;

pub use manifest::{Manifest, ManifestEntry};
