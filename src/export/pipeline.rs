//! Bundle export orchestration

use super::config::ExportConfig;
use super::format::{confirmation_message, label_line, BLOCK_SEPARATOR};
use super::reader::{read_or_substitute, ReadError};
use crate::model::Manifest;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Per-run tally, used for logging only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Entries whose content was written verbatim
    pub exported: usize,

    /// Entries replaced by the not-found message
    pub not_found: usize,

    /// Entries replaced by the read-error message
    pub failed: usize,
}

impl ExportReport {
    /// Total number of blocks written
    pub fn total(&self) -> usize {
        self.exported + self.not_found + self.failed
    }
}

/// Writes labelled file contents into a single bundle
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Target output file
    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// Write the bundle for `paths` to the configured output file
    ///
    /// The file is truncated, never appended to. Per-file read failures are
    /// substituted into the bundle; only output errors are returned.
    pub fn export<S: AsRef<str>>(&self, paths: &[S]) -> Result<ExportReport> {
        let output_path = self.output_path();
        log::info!("Exporting {} file(s) to {:?}", paths.len(), output_path);

        let file = File::create(output_path)
            .with_context(|| format!("Failed to create output file: {:?}", output_path))?;
        let mut writer = BufWriter::new(file);

        let report = self
            .write_bundle(paths, &mut writer)
            .with_context(|| format!("Failed to write output file: {:?}", output_path))?;

        writer
            .flush()
            .with_context(|| format!("Failed to flush output file: {:?}", output_path))?;

        log::info!(
            "Export summary: {} exported, {} missing, {} unreadable",
            report.exported,
            report.not_found,
            report.failed
        );
        println!("{}", confirmation_message(output_path));

        Ok(report)
    }

    /// Write the bundle for `paths` to any sink
    pub fn write_bundle<S: AsRef<str>, W: Write>(
        &self,
        paths: &[S],
        mut out: W,
    ) -> Result<ExportReport> {
        let mut report = ExportReport::default();

        for (i, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            log::info!("[{}/{}] Exporting: {}", i + 1, paths.len(), path);

            out.write_all(label_line(path).as_bytes())?;

            let (content, failure) = read_or_substitute(path);
            match failure {
                None => {
                    log::debug!("Read {} bytes from {}", content.len(), path);
                    report.exported += 1;
                }
                Some(err @ ReadError::NotFound { .. }) => {
                    log::warn!("{}", err);
                    report.not_found += 1;
                }
                Some(err @ ReadError::Other { .. }) => {
                    log::warn!("{}", err);
                    report.failed += 1;
                }
            }

            out.write_all(content.as_bytes())?;
            out.write_all(BLOCK_SEPARATOR.as_bytes())?;
        }

        Ok(report)
    }
}

/// Export `paths` into `output_path` and print the confirmation line
pub fn export_files<S: AsRef<str>>(paths: &[S], output_path: &Path) -> Result<ExportReport> {
    Exporter::new(ExportConfig::new(output_path)).export(paths)
}

/// Export the enabled entries of `manifest` into `output_path`
pub fn export_manifest(manifest: &Manifest, output_path: &Path) -> Result<ExportReport> {
    let paths = manifest.enabled_paths();
    log::debug!(
        "Manifest: {} enabled of {} entries",
        paths.len(),
        manifest.len()
    );
    export_files(&paths, output_path)
}
