//! Grouped column chart.

use crate::error::{PlotError, Result};
use crate::layout::HeaderFlavor;
use crate::pattern::TileSource;
use crate::style::{BarStyle, ChartParams, Theme, resolve_style};
use crate::svg::{Document, Element, TextAnchor, tick_label};

use super::bar::{BarData, bar_column_fills, fill_at, legend_entries};
use super::{Chart, ChartKind, anchored_label, header, start_document, wrong_params};

/// Column charts take the same grouped data as bar charts.
pub type ColumnData = BarData;

const CHART_X: f64 = 32.0;
const SIDE_PADDING: f64 = 64.0;
const BOTTOM_PADDING: f64 = 16.0;
/// Space under the plot reserved for category labels.
const LABEL_GUTTER: f64 = 40.0;
const COLUMN_WIDTH: f64 = 40.0;
const COLUMN_GAP: f64 = 10.0;
/// Headroom above the tallest column.
const HEADROOM: f64 = 1.1;
const TICK_STEPS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct ColumnChart {
    pub style: BarStyle,
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
}

impl Default for ColumnChart {
    fn default() -> Self {
        Self {
            style: BarStyle::default(),
            theme: Theme::default(),
            width: 1002.0,
            height: 499.0,
        }
    }
}

impl ColumnChart {
    #[must_use]
    pub fn new(style: BarStyle, theme: Theme) -> Self {
        Self {
            style,
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

impl Chart for ColumnChart {
    type Data = ColumnData;

    fn kind(&self) -> ChartKind {
        ChartKind::Column
    }

    #[allow(clippy::cast_precision_loss)] // Category, series and tick counts are small
    fn render(&self, data: &ColumnData, tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve_style(self.theme.bar_column_id())?;
        if style.params != ChartParams::BarColumn {
            return Err(wrong_params(ChartKind::Column, style));
        }
        data.validate(ChartKind::Column)?;

        let max_value = data
            .series
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if max_value <= 0.0 {
            return Err(PlotError::DegenerateData(
                "column chart has no positive value".to_string(),
            ));
        }
        let y_max = max_value * HEADROOM;
        tracing::debug!(
            style = ?self.style,
            theme = style.id,
            categories = data.categories.len(),
            series = data.series.len(),
            y_max,
            "rendering column chart"
        );

        let mut builder = start_document(self.width, self.height, style).with_xlink();
        let fills = bar_column_fills(self.style, style, &mut builder, tiles)?;
        let legend = legend_entries(&fills, &data.labels, style);
        let head = header(HeaderFlavor::Wide, self.width, style, &data.title, &legend);
        builder.extend(head.elements);

        let top = head.chart_start_y;
        let chart_width = self.width - SIDE_PADDING;
        let chart_height = self.height - BOTTOM_PADDING - top - LABEL_GUTTER;
        let bottom = top + chart_height;
        let text = style.palette.color("legend_text");

        for i in 0..=TICK_STEPS {
            let fraction = i as f64 / TICK_STEPS as f64;
            let y = bottom - fraction * chart_height;
            builder.push(anchored_label(
                (CHART_X - 10.0, y + 4.0),
                text,
                style.font.tick,
                TextAnchor::End,
                style,
                tick_label(fraction * y_max),
            ));
        }

        let series_count = data.series.len() as f64;
        let group_width = chart_width / data.categories.len() as f64;
        let total_width = series_count * COLUMN_WIDTH + (series_count - 1.0) * COLUMN_GAP;

        for (c, category) in data.categories.iter().enumerate() {
            let center = CHART_X + c as f64 * group_width + group_width / 2.0;
            let start = center - total_width / 2.0;
            for (s, values) in data.series.iter().enumerate() {
                let height = values[c] / y_max * chart_height;
                builder.push(
                    Element::rect()
                        .num("x", start + s as f64 * (COLUMN_WIDTH + COLUMN_GAP))
                        .num("y", bottom - height)
                        .num("width", COLUMN_WIDTH)
                        .num("height", height)
                        .paint("fill", &fill_at(&fills, s, style)),
                );
            }
            builder.push(anchored_label(
                (center, bottom + 20.0),
                text,
                style.font.label,
                TextAnchor::Middle,
                style,
                category.as_str(),
            ));
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
#[path = "column_tests.rs"]
mod tests;
