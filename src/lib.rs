//! File Exporter - concatenate a fixed list of files into one text bundle
//!
//! Each file is written after a `文件名：<path>` label line. Missing or
//! unreadable files are replaced by a message instead of aborting the run.

pub mod export;
pub mod model;
pub mod validation;

pub use export::config::ExportConfig;
pub use export::pipeline::{export_files, export_manifest, Exporter};
pub use model::Manifest;
