//! Manifest semantic validation.
//!
//! Checks manifest-level constraints after parsing. Per-chart data consistency is left
//! to the renderers.

use indexmap::IndexSet;

use super::model::{ChartEntry, Manifest};
use crate::error::{PlotError, Result};

/// Validates a parsed manifest.
///
/// # Errors
/// Returns a `Config` error if the manifest has no charts, two charts share a name, a
/// name is not a usable file stem, or a size is not positive.
pub fn validate_manifest(manifest: &Manifest) -> Result<()> {
    if manifest.charts.is_empty() {
        return Err(PlotError::Config(
            "manifest defines no charts (add a [[chart]] table)".to_string(),
        ));
    }

    let mut seen = IndexSet::with_capacity(manifest.charts.len());
    for (i, entry) in manifest.charts.iter().enumerate() {
        validate_name(i, &entry.name)?;
        if !seen.insert(entry.name.as_str()) {
            return Err(PlotError::Config(format!(
                "chart[{i}]: duplicate chart name '{}'",
                entry.name
            )));
        }
        validate_size(i, entry)?;
    }
    Ok(())
}

fn validate_name(index: usize, name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(PlotError::Config(format!(
            "chart[{index}]: name must be a non-empty file stem"
        )));
    }
    if name.contains(['/', '\\']) {
        return Err(PlotError::Config(format!(
            "chart[{index}]: name '{name}' must not contain path separators"
        )));
    }
    Ok(())
}

fn validate_size(index: usize, entry: &ChartEntry) -> Result<()> {
    for (field, value) in [("width", entry.width), ("height", entry.height)] {
        if let Some(v) = value
            && !(v.is_finite() && v > 0.0)
        {
            return Err(PlotError::Config(format!(
                "chart[{index}].{field} must be a positive number, got {v}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
