//! Horizontal stacked bar chart, plus the fill arrangement shared with the column chart.

use crate::error::{PlotError, Result};
use crate::layout::{HeaderFlavor, LegendEntry};
use crate::pattern::{PatternEmbedder, Tile, TileSource};
use crate::style::{BarStyle, ChartParams, StyleRecord, Theme, resolve_style};
use crate::svg::{Document, DocumentBuilder, Element, Paint, TextAnchor, tick_label};

use super::{
    Chart, ChartKind, anchored_label, check_finite, check_len, header, label, start_document,
    wrong_params,
};

const CHART_X: f64 = 32.0;
const SIDE_PADDING: f64 = 64.0;
const BOTTOM_PADDING: f64 = 16.0;
const ROW_PITCH: f64 = 50.0;
const BAR_HEIGHT: f64 = 30.0;
/// Horizontal space reserved for the category labels.
const LABEL_WIDTH: f64 = 120.0;
const TICK_STEPS: usize = 8;

/// Grouped series over shared categories, used by bar and column charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarData {
    pub categories: Vec<String>,
    /// One value per category in each series.
    pub series: Vec<Vec<f64>>,
    pub labels: Vec<String>,
    pub title: String,
}

impl BarData {
    #[must_use]
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        categories: impl IntoIterator<Item = S>,
        series: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            series,
            labels: Vec::new(),
            title: title.into(),
        }
    }

    #[must_use]
    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Check that every series covers every category with finite, non-negative values.
    pub(crate) fn validate(&self, kind: ChartKind) -> Result<()> {
        if self.categories.is_empty() || self.series.is_empty() {
            return Err(PlotError::DegenerateData(format!(
                "{kind} chart needs at least one category and one series"
            )));
        }
        for (i, values) in self.series.iter().enumerate() {
            check_len(&format!("series {i}"), self.categories.len(), values.len())?;
        }
        check_finite(&format!("{kind} series"), self.series.iter().flatten())?;
        if let Some(v) = self.series.iter().flatten().find(|v| **v < 0.0) {
            return Err(PlotError::DegenerateData(format!(
                "{kind} series values must not be negative, got {v}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BarChart {
    pub style: BarStyle,
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            style: BarStyle::default(),
            theme: Theme::default(),
            width: 1002.0,
            height: 499.0,
        }
    }
}

impl BarChart {
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

impl Chart for BarChart {
    type Data = BarData;

    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    #[allow(clippy::cast_precision_loss)] // Category and tick indices are small
    fn render(&self, data: &BarData, tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve_style(self.theme.bar_column_id())?;
        if style.params != ChartParams::BarColumn {
            return Err(wrong_params(ChartKind::Bar, style));
        }
        data.validate(ChartKind::Bar)?;

        let max_total = (0..data.categories.len())
            .map(|c| data.series.iter().map(|s| s[c]).sum::<f64>())
            .fold(f64::NEG_INFINITY, f64::max);
        if max_total <= 0.0 {
            return Err(PlotError::DegenerateData(
                "bar chart row totals are all zero".to_string(),
            ));
        }
        tracing::debug!(
            style = ?self.style,
            theme = style.id,
            rows = data.categories.len(),
            series = data.series.len(),
            "rendering bar chart"
        );

        let mut builder = start_document(self.width, self.height, style).with_xlink();
        let fills = bar_column_fills(self.style, style, &mut builder, tiles)?;
        let legend = legend_entries(&fills, &data.labels, style);
        let head = header(HeaderFlavor::Wide, self.width, style, &data.title, &legend);
        builder.extend(head.elements);

        let top = head.chart_start_y;
        let chart_width = self.width - SIDE_PADDING;
        let span = chart_width - LABEL_WIDTH;
        let text = style.palette.color("legend_text");

        for (c, category) in data.categories.iter().enumerate() {
            let y = top + c as f64 * ROW_PITCH;
            builder.push(label(CHART_X, y + 20.0, text, style.font.label, style, category.as_str()));

            let mut x = CHART_X + LABEL_WIDTH;
            for (s, values) in data.series.iter().enumerate() {
                let width = values[c] / max_total * span;
                builder.push(
                    Element::rect()
                        .num("x", x)
                        .num("y", y)
                        .num("width", width)
                        .num("height", BAR_HEIGHT)
                        .paint("fill", &fill_at(&fills, s, style)),
                );
                x += width;
            }
        }

        let tick_y = top + data.categories.len() as f64 * ROW_PITCH + 10.0;
        for i in 0..=TICK_STEPS {
            let fraction = i as f64 / TICK_STEPS as f64;
            builder.push(anchored_label(
                (CHART_X + LABEL_WIDTH + fraction * span, tick_y),
                text,
                style.font.tick,
                TextAnchor::Middle,
                style,
                tick_label(fraction * max_total),
            ));
        }

        Ok(builder.build())
    }
}

/// Color role or pattern behind one series slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fill {
    Role(&'static str),
    Pattern(&'static str, Tile),
}

const fn fill_slots(style: BarStyle) -> [Fill; 3] {
    const NOISE: Fill = Fill::Pattern("pattern-noise", Tile::NoiseRectangleLarge);
    const CROSSING: Fill = Fill::Pattern("pattern-crossing", Tile::CrossingLines);
    const DITHER: Fill = Fill::Pattern("pattern-dither", Tile::DitherCrossLarge);
    match style {
        BarStyle::Solid => [Fill::Role("one"), Fill::Role("two"), Fill::Role("three")],
        BarStyle::Pattern1 => [Fill::Role("one"), NOISE, Fill::Role("three")],
        BarStyle::Pattern2 => [Fill::Role("one"), CROSSING, Fill::Role("three")],
        BarStyle::Pattern3 => [Fill::Role("one"), NOISE, DITHER],
        BarStyle::Multicolor => [
            Fill::Role("multi_one"),
            Fill::Role("multi_two"),
            Fill::Role("multi_three"),
        ],
    }
}

/// Series paints of a bar or column style, registering the patterns they use.
pub(crate) fn bar_column_fills(
    style: BarStyle,
    record: &StyleRecord,
    builder: &mut DocumentBuilder,
    tiles: &dyn TileSource,
) -> Result<Vec<Paint>> {
    let mut embedder = PatternEmbedder::new(tiles);
    fill_slots(style)
        .into_iter()
        .map(|slot| match slot {
            Fill::Role(role) => Ok(Paint::solid(record.palette.color(role))),
            Fill::Pattern(id, tile) => {
                builder.define(embedder.pattern(id, tile)?)?;
                Ok(Paint::pattern(id))
            }
        })
        .collect()
}

/// Paint of series `index`; series past the style's slots use the first role.
pub(crate) fn fill_at(fills: &[Paint], index: usize, style: &StyleRecord) -> Paint {
    fills
        .get(index)
        .cloned()
        .unwrap_or_else(|| Paint::solid(style.palette.color("one")))
}

pub(crate) fn legend_entries(
    fills: &[Paint],
    labels: &[String],
    style: &StyleRecord,
) -> Vec<LegendEntry> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| LegendEntry::new(label.as_str(), fill_at(fills, i, style)))
        .collect()
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
