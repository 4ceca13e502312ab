use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{Manifest, ManifestFormat};
use super::validation::validate_manifest;

/// Trait for loading chart manifests.
pub trait ManifestLoader {
    /// Load, validate and resolve a manifest.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    fn load(&self, path: &Path) -> Result<Manifest>;
}

impl ManifestFormat {
    /// Format implied by a file extension (`.toml` or `.json`, case-insensitive).
    ///
    /// # Errors
    /// Returns a `Config` error for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(PlotError::Config(format!(
                "Unsupported manifest extension for '{}': expected .toml or .json",
                path.display()
            ))),
        }
    }
}

/// Parse manifest text without validating it.
///
/// # Errors
/// Returns `TomlParse` or `JsonParse` on malformed input.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> Result<Manifest> {
    let manifest = match format {
        ManifestFormat::Toml => toml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
    };
    Ok(manifest)
}

/// Loads manifests from the filesystem.
///
/// Relative `assets_dir` and `output_dir` settings are resolved against the directory
/// holding the manifest.
#[derive(Debug)]
pub struct FileManifestLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileManifestLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileManifestLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileManifestLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }
}

fn resolve_relative(base: &Path, path: &mut Option<PathBuf>) {
    if let Some(p) = path
        && p.is_relative()
    {
        *p = base.join(&*p);
    }
}

impl<F: FileSystem> ManifestLoader for FileManifestLoader<F> {
    fn load(&self, path: &Path) -> Result<Manifest> {
        let format = ManifestFormat::from_path(path)?;
        if !self.fs.exists(path) {
            return Err(PlotError::Config(format!(
                "Manifest not found: {}",
                path.display()
            )));
        }
        let content = self.fs.read_to_string(path)?;
        let mut manifest = parse_manifest(&content, format)?;
        validate_manifest(&manifest)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        resolve_relative(base, &mut manifest.settings.assets_dir);
        resolve_relative(base, &mut manifest.settings.output_dir);

        tracing::info!(
            path = %path.display(),
            charts = manifest.charts.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
