//! Donut chart with a center label and value.

use crate::error::Result;
use crate::geometry::donut_slice_path;
use crate::layout::{HeaderFlavor, LegendEntry};
use crate::pattern::TileSource;
use crate::style::{ChartParams, StyleRecord, Theme, resolve_style};
use crate::svg::{Document, Element, Paint, TextAnchor, tick_label};

use super::{Chart, ChartKind, anchored_label, check_finite, header, start_document, wrong_params};

/// First slice starts at 12 o'clock.
const START_ANGLE: f64 = -90.0;
/// Outer padding between the donut and the chart edges.
const RING_MARGIN: f64 = 32.0;
const CENTER_LABEL_SIZE: u16 = 12;
const CENTER_VALUE_SIZE: u16 = 16;
const DEFAULT_CENTER_LABEL: &str = "Total";

/// Input of a pie chart. Labels beyond the value count are not listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieData {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    pub title: String,
    /// Text above the center value; `Total` when absent.
    pub center_label: Option<String>,
    /// Text in the center; the integer part of the positive total when absent.
    pub center_value: Option<String>,
}

impl PieData {
    #[must_use]
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        values: Vec<f64>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            values,
            labels: labels.into_iter().map(Into::into).collect(),
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_center(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.center_label = Some(label.into());
        self.center_value = Some(value.into());
        self
    }
}

/// Sum of the values that draw a slice.
fn positive_total(values: &[f64]) -> f64 {
    values.iter().filter(|v| **v > 0.0).sum()
}

/// Sweep in degrees of each value; `None` for values that draw no slice.
///
/// Non-positive values are left out of the total, so the drawn slices always close the ring.
#[must_use]
pub(crate) fn slice_sweeps(values: &[f64]) -> Vec<Option<f64>> {
    let total = positive_total(values);
    values
        .iter()
        .map(|&v| (total > 0.0 && v > 0.0).then(|| v / total * 360.0))
        .collect()
}

fn slice_color(style: &StyleRecord, index: usize) -> &'static str {
    style.palette.color_or(&format!("slice{}", index + 1), "slice1")
}

#[derive(Debug, Clone, Copy)]
pub struct PieChart {
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            width: 328.0,
            height: 328.0,
        }
    }
}

impl PieChart {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Chart for PieChart {
    type Data = PieData;

    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn render(&self, data: &PieData, _tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve_style(self.theme.pie_id())?;
        let ChartParams::Pie {
            inner_radius,
            separator_width,
        } = style.params
        else {
            return Err(wrong_params(ChartKind::Pie, style));
        };
        check_finite("pie values", &data.values)?;
        let sweeps = slice_sweeps(&data.values);
        tracing::debug!(
            theme = style.id,
            slices = sweeps.iter().flatten().count(),
            "rendering pie chart"
        );

        let legend: Vec<LegendEntry> = data
            .labels
            .iter()
            .take(data.values.len())
            .enumerate()
            .map(|(i, label)| LegendEntry::new(label.as_str(), Paint::solid(slice_color(style, i))))
            .collect();
        let head = header(HeaderFlavor::Compact, self.width, style, &data.title, &legend);
        let top = head.chart_start_y;

        let cx = (self.width / 2.0).floor();
        let cy = top + ((self.height - top) / 2.0).floor();
        let outer = (self.height - top - RING_MARGIN).min(self.width - RING_MARGIN) / 2.0;
        let inner = outer * inner_radius;

        let mut builder = start_document(self.width, self.height, style);
        builder.extend(head.elements);

        let separator = style.palette.color("separator");
        let mut start = START_ANGLE;
        for (i, sweep) in sweeps.into_iter().enumerate() {
            let Some(sweep) = sweep else { continue };
            if let Some(path) = donut_slice_path(cx, cy, outer, inner, start, sweep) {
                builder.push(
                    Element::path()
                        .attr("d", path.to_string())
                        .attr("fill", slice_color(style, i))
                        .attr("stroke", separator)
                        .num("stroke-width", separator_width),
                );
            }
            start += sweep;
        }

        let text = style.palette.color_or("center_text", "title");
        let value = data
            .center_value
            .clone()
            .unwrap_or_else(|| tick_label(positive_total(&data.values)));
        builder.push(anchored_label(
            (cx, cy - 8.0),
            text,
            CENTER_LABEL_SIZE,
            TextAnchor::Middle,
            style,
            data.center_label.as_deref().unwrap_or(DEFAULT_CENTER_LABEL),
        ));
        builder.push(anchored_label(
            (cx, cy + 8.0),
            text,
            CENTER_VALUE_SIZE,
            TextAnchor::Middle,
            style,
            value,
        ));

        Ok(builder.build())
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
