//! Bundle export: reading entries and writing the labelled output

pub mod config;
pub mod format;
pub mod pipeline;
pub mod reader;

pub use config::ExportConfig;
pub use pipeline::{export_files, export_manifest, ExportReport, Exporter};
pub use reader::{read_entry, ReadError};
