//! Structural check of a written bundle

use crate::export::format::{label_line, BLOCK_SEPARATOR};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Validate a written bundle against the paths it was built from
///
/// # Arguments
/// * `output_path` - Bundle file to check
/// * `paths` - Paths passed to the export, in order
///
/// # Returns
/// Ok(()) if every label appears in order and the bundle is terminated,
/// Err otherwise
pub fn validate_export<S: AsRef<str>>(output_path: &Path, paths: &[S]) -> Result<()> {
    log::info!("Validating bundle at: {:?}", output_path);

    let bundle = fs::read_to_string(output_path)
        .with_context(|| format!("Failed to read bundle: {:?}", output_path))?;
    log::debug!("Bundle size: {} bytes", bundle.len());

    validate_bundle(&bundle, paths)
}

/// Validate bundle text already in memory
pub fn validate_bundle<S: AsRef<str>>(bundle: &str, paths: &[S]) -> Result<()> {
    if paths.is_empty() {
        if !bundle.is_empty() {
            anyhow::bail!("Bundle should be empty for an empty file list");
        }
        return Ok(());
    }

    let mut cursor = 0;
    for (i, path) in paths.iter().enumerate() {
        let label = label_line(path.as_ref());

        // The first label must open the bundle; later ones follow a separator
        let found = if i == 0 {
            bundle.starts_with(&label).then_some(0)
        } else {
            let needle = format!("{}{}", BLOCK_SEPARATOR, label);
            bundle[cursor..]
                .find(&needle)
                .map(|offset| cursor + offset + BLOCK_SEPARATOR.len())
        };

        match found {
            Some(pos) => cursor = pos + label.len(),
            None => anyhow::bail!(
                "Block {} ({}) missing or out of order",
                i + 1,
                path.as_ref()
            ),
        }
    }

    if !bundle.ends_with(BLOCK_SEPARATOR) {
        anyhow::bail!("Bundle does not end with a block separator");
    }

    log::info!("Bundle contains {} block(s) in order", paths.len());
    Ok(())
}
