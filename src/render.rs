//! Manifest rendering: chart dispatch, parallel rendering and file output.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::chart::{
    AreaChart, AreaData, BarChart, BarData, BubbleChart, BubbleData, Chart, ChartKind,
    ColumnChart, ColumnData, LineChart, LineData, PieChart, PieData, RadarBubbleChart,
    RadarBubbleData, RadarChart, RadarData,
};
use crate::error::{PlotError, Result};
use crate::pattern::{BuiltinTiles, DirTileSource, TileSource};
use crate::svg::{Document, OutputFormat, with_xml_prolog};

/// A configured chart together with its data.
#[derive(Debug, Clone)]
pub enum ChartJob {
    Area(AreaChart, AreaData),
    Bar(BarChart, BarData),
    Column(ColumnChart, ColumnData),
    Line(LineChart, LineData),
    Bubble(BubbleChart, BubbleData),
    RadarBubble(RadarBubbleChart, RadarBubbleData),
    Pie(PieChart, PieData),
    Radar(RadarChart, RadarData),
}

impl ChartJob {
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Area(..) => ChartKind::Area,
            Self::Bar(..) => ChartKind::Bar,
            Self::Column(..) => ChartKind::Column,
            Self::Line(..) => ChartKind::Line,
            Self::Bubble(..) => ChartKind::Bubble,
            Self::RadarBubble(..) => ChartKind::RadarBubble,
            Self::Pie(..) => ChartKind::Pie,
            Self::Radar(..) => ChartKind::Radar,
        }
    }

    /// Render the chart.
    ///
    /// # Errors
    /// Propagates the renderer's error.
    pub fn render(&self, tiles: &dyn TileSource) -> Result<Document> {
        match self {
            Self::Area(chart, data) => chart.render(data, tiles),
            Self::Bar(chart, data) => chart.render(data, tiles),
            Self::Column(chart, data) => chart.render(data, tiles),
            Self::Line(chart, data) => chart.render(data, tiles),
            Self::Bubble(chart, data) => chart.render(data, tiles),
            Self::RadarBubble(chart, data) => chart.render(data, tiles),
            Self::Pie(chart, data) => chart.render(data, tiles),
            Self::Radar(chart, data) => chart.render(data, tiles),
        }
    }
}

/// A job with the file stem its document is written under.
#[derive(Debug, Clone)]
pub struct NamedJob {
    pub name: String,
    pub job: ChartJob,
}

/// Result of rendering one job.
#[derive(Debug)]
pub struct RenderOutcome {
    pub name: String,
    pub kind: ChartKind,
    pub result: Result<Document>,
}

/// Render every job in parallel. Outcomes keep the input order.
pub fn render_all(jobs: &[NamedJob], tiles: &dyn TileSource) -> Vec<RenderOutcome> {
    jobs.par_iter()
        .map(|named| {
            let result = named.job.render(tiles);
            match &result {
                Ok(_) => tracing::debug!(name = %named.name, kind = %named.job.kind(), "rendered"),
                Err(e) => tracing::warn!(name = %named.name, error = %e, "render failed"),
            }
            RenderOutcome {
                name: named.name.clone(),
                kind: named.job.kind(),
                result,
            }
        })
        .collect()
}

/// Tile source for an optional assets directory; built-in tiles without one.
#[must_use]
pub fn tile_source(assets_dir: Option<&Path>) -> Box<dyn TileSource> {
    match assets_dir {
        Some(dir) => Box::new(DirTileSource::new(dir)),
        None => Box::new(BuiltinTiles),
    }
}

/// File a chart named `name` is written to.
#[must_use]
pub fn output_path(dir: &Path, name: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("{name}.{format}"))
}

/// Write a document to `path` with the XML declaration, creating parent directories.
///
/// # Errors
/// Returns `UnsupportedOutput` for non-SVG formats and `FileWrite` if the file cannot
/// be written.
pub fn write_document(document: &Document, path: &Path, format: OutputFormat) -> Result<()> {
    let markup = document.export(format)?;
    let to_write_error = |source| PlotError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, with_xml_prolog(&markup)).map_err(to_write_error)?;
    tracing::info!(path = %path.display(), "wrote chart");
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
