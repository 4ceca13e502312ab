//! Chart renderers: one struct per chart type, each producing a complete [`Document`].

mod area;
mod bar;
mod bubble;
mod column;
mod line;
mod pie;
mod radar;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::geometry::Point;
use crate::layout::{Header, HeaderColors, HeaderFlavor, HeaderLayout, LegendEntry};
use crate::pattern::TileSource;
use crate::style::StyleRecord;
use crate::svg::{Document, DocumentBuilder, Element, TextAnchor};

pub use area::{AreaChart, AreaData};
pub use bar::{BarChart, BarData};
pub use bubble::{BubbleChart, BubbleData, RadarBubbleChart, RadarBubbleData, legend_categories};
pub use column::{ColumnChart, ColumnData};
pub use line::{LineChart, LineData};
pub use pie::{PieChart, PieData};
pub use radar::{RadarChart, RadarData};

/// A chart type that renders its data into a document.
pub trait Chart {
    type Data;

    fn kind(&self) -> ChartKind;

    /// Render `data` into a complete document.
    ///
    /// # Errors
    /// Returns an error for inconsistent or degenerate data, an unknown style, or a
    /// pattern tile that cannot be loaded. No partial document is produced.
    fn render(&self, data: &Self::Data, tiles: &dyn TileSource) -> Result<Document>;
}

/// Every supported chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Area,
    Bar,
    Column,
    Line,
    Bubble,
    RadarBubble,
    Pie,
    Radar,
}

impl ChartKind {
    pub const ALL: [Self; 8] = [
        Self::Area,
        Self::Bar,
        Self::Column,
        Self::Line,
        Self::Bubble,
        Self::RadarBubble,
        Self::Pie,
        Self::Radar,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Column => "column",
            Self::Line => "line",
            Self::Bubble => "bubble",
            Self::RadarBubble => "radar_bubble",
            Self::Pie => "pie",
            Self::Radar => "radar",
        }
    }

    /// Style family listed by `list_styles` for this chart type.
    #[must_use]
    pub const fn style_family(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Bar | Self::Column => "bar/column",
            Self::Line => "line",
            Self::Bubble | Self::RadarBubble => "bubble",
            Self::Pie => "pie",
            Self::Radar => "radar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                PlotError::Config(format!(
                    "unknown chart kind '{s}' (expected one of: {})",
                    Self::ALL.map(Self::name).join(", ")
                ))
            })
    }
}

/// Document builder with the style's background.
pub(crate) fn start_document(width: f64, height: f64, style: &StyleRecord) -> DocumentBuilder {
    DocumentBuilder::new(width, height).with_background(style.palette.color("background"))
}

/// Title and legend for a chart.
pub(crate) fn header(
    flavor: HeaderFlavor,
    width: f64,
    style: &StyleRecord,
    title: &str,
    entries: &[LegendEntry],
) -> Header {
    let colors = HeaderColors {
        title: style.palette.color("title"),
        legend_text: style.palette.color("legend_text"),
    };
    HeaderLayout::new(flavor, width, &style.font, colors).render(title, entries)
}

/// A text label with the shared attribute order (`x y fill font-size font-weight`).
pub(crate) fn label(
    x: f64,
    y: f64,
    fill: &str,
    size: u16,
    style: &StyleRecord,
    text: impl Into<String>,
) -> Element {
    Element::text()
        .num("x", x)
        .num("y", y)
        .attr("fill", fill)
        .attr("font-size", size.to_string())
        .attr("font-weight", style.font.weight.to_string())
        .content(text)
}

/// [`label`] followed by a `text-anchor`.
pub(crate) fn anchored_label(
    (x, y): (f64, f64),
    fill: &str,
    size: u16,
    anchor: TextAnchor,
    style: &StyleRecord,
    text: impl Into<String>,
) -> Element {
    Element::text()
        .num("x", x)
        .num("y", y)
        .attr("fill", fill)
        .attr("font-size", size.to_string())
        .attr("font-weight", style.font.weight.to_string())
        .anchor(anchor)
        .content(text)
}

/// Thin grid or axis line; callers append dash or opacity attributes.
pub(crate) fn grid_line(from: Point, to: Point, stroke: &str) -> Element {
    Element::line()
        .num("x1", from.x)
        .num("y1", from.y)
        .num("x2", to.x)
        .num("y2", to.y)
        .attr("stroke", stroke)
        .attr("stroke-width", "1")
}

/// Fail with `DimensionMismatch` unless `actual == expected`.
pub(crate) fn check_len(context: &str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(PlotError::mismatch(context, expected, actual))
    }
}

/// Fail with `DegenerateData` if any value is NaN or infinite.
pub(crate) fn check_finite<'a>(
    context: &str,
    values: impl IntoIterator<Item = &'a f64>,
) -> Result<()> {
    if values.into_iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PlotError::DegenerateData(format!(
            "{context} contains a non-finite value"
        )))
    }
}

/// Style record that does not carry the parameters this chart type needs.
pub(crate) fn wrong_params(kind: ChartKind, style: &StyleRecord) -> PlotError {
    PlotError::InvalidStyle {
        requested: style.id.to_string(),
        available: crate::style::list_styles(Some(kind.style_family()))
            .iter()
            .map(|s| s.id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
