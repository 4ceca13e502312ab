use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::ChartKind;
use crate::style::StyleSelector;

/// A chart manifest: shared settings plus one entry per chart to render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    #[serde(default)]
    pub settings: Settings,

    /// Charts in render order (`[[chart]]` tables).
    #[serde(default, rename = "chart")]
    pub charts: Vec<ChartEntry>,
}

/// Manifest-wide settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding pattern tile files. Built-in tiles are used when absent.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// Directory charts are written to. The current directory when absent.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Category list of an entry: names for bar/column charts, indices for bubble charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Categories {
    Indices(Vec<usize>),
    Names(Vec<String>),
}

/// One `[[chart]]` entry.
///
/// Fields are shared across chart kinds; each kind reads the subset it needs and
/// rejects missing required ones when the entry is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartEntry {
    pub kind: ChartKind,

    /// Output file stem.
    pub name: String,

    #[serde(default)]
    pub title: Option<String>,

    /// Style name or 1-based number (area, line, bar, column).
    #[serde(default)]
    pub style: Option<StyleSelector>,

    /// Color theme (`brand`/`black`/`white`, or `dark`/`white` for line charts).
    #[serde(default)]
    pub theme: Option<StyleSelector>,

    #[serde(default)]
    pub width: Option<f64>,

    #[serde(default)]
    pub height: Option<f64>,

    #[serde(default)]
    pub x: Vec<f64>,

    #[serde(default)]
    pub y: Vec<f64>,

    #[serde(default)]
    pub series: Vec<Vec<f64>>,

    #[serde(default)]
    pub values: Vec<f64>,

    #[serde(default)]
    pub sizes: Vec<f64>,

    #[serde(default)]
    pub angles: Vec<f64>,

    #[serde(default)]
    pub distances: Vec<f64>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub categories: Option<Categories>,

    #[serde(default)]
    pub category_labels: Vec<String>,

    /// Explicit line colors.
    #[serde(default)]
    pub colors: Option<Vec<String>>,

    #[serde(default)]
    pub strict_colors: bool,

    #[serde(default)]
    pub line_width: Option<f64>,

    /// Minimum and maximum bubble radius.
    #[serde(default)]
    pub size_range: Option<(f64, f64)>,

    #[serde(default)]
    pub num_rings: Option<usize>,

    #[serde(default)]
    pub num_axes: Option<usize>,

    #[serde(default)]
    pub axis_labels: Option<Vec<String>>,

    #[serde(default)]
    pub center_label: Option<String>,

    #[serde(default)]
    pub center_value: Option<String>,
}

impl ChartEntry {
    /// Minimal entry of the given kind; every data field empty.
    #[must_use]
    pub fn new(kind: ChartKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            title: None,
            style: None,
            theme: None,
            width: None,
            height: None,
            x: Vec::new(),
            y: Vec::new(),
            series: Vec::new(),
            values: Vec::new(),
            sizes: Vec::new(),
            angles: Vec::new(),
            distances: Vec::new(),
            labels: Vec::new(),
            categories: None,
            category_labels: Vec::new(),
            colors: None,
            strict_colors: false,
            line_width: None,
            size_range: None,
            num_rings: None,
            num_axes: None,
            axis_labels: None,
            center_label: None,
            center_value: None,
        }
    }

    /// Title shown in the chart header; the entry name when absent.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// Manifest file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
