use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Invalid style '{requested}'. Available styles: {available}")]
    InvalidStyle { requested: String, available: String },

    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Degenerate data: {0}")]
    DegenerateData(String),

    #[error("Missing pattern tile '{tile}': {reason}")]
    MissingAsset { tile: String, reason: String },

    #[error("Unsupported output format: {0} (only SVG output is supported)")]
    UnsupportedOutput(String),

    #[error("Duplicate definition id in document: {0}")]
    DuplicateDefinition(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl PlotError {
    /// Short category name, used in CLI summaries.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidStyle { .. } => "InvalidStyle",
            Self::DimensionMismatch { .. } => "DimensionMismatch",
            Self::DegenerateData(_) => "DegenerateData",
            Self::MissingAsset { .. } => "MissingAsset",
            Self::UnsupportedOutput(_) => "UnsupportedOutput",
            Self::DuplicateDefinition(_) => "DuplicateDefinition",
            Self::Config(_) | Self::TomlParse(_) | Self::JsonParse(_) => "Config",
            Self::FileWrite { .. } | Self::Io(_) => "IO",
        }
    }

    pub(crate) fn mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Whether the error comes from the manifest or command line rather than from rendering.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::TomlParse(_) | Self::JsonParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
