//! Stacked area chart.
//!
//! Bands are clipped to the plot frame. Opacity and solid styles paint the bottom band
//! last; gradient and pattern styles paint the top band last.

use crate::error::Result;
use crate::geometry::{Point, Rect, stacked_band_paths};
use crate::layout::{HeaderFlavor, LegendEntry};
use crate::pattern::{PatternEmbedder, Tile, TileSource};
use crate::style::{AreaFill, AreaStyle, ChartParams, StyleRecord, resolve_style};
use crate::svg::{Document, DocumentBuilder, Element, Paint, Tag, TextAnchor, zero_pad};

use super::{
    Chart, ChartKind, anchored_label, check_finite, grid_line, header, start_document,
    wrong_params,
};

const CHART_X: f64 = 32.0;
const CHART_WIDTH: f64 = 938.0;
/// Chart height of the opacity and solid styles, independent of the document height.
const FIXED_CHART_HEIGHT: f64 = 385.0;
const BOTTOM_PADDING: f64 = 16.0;
/// Space under the bands reserved for the x labels.
const LABEL_GUTTER: f64 = 40.0;
const GRID_LINES: usize = 15;
const GRID_SPACING: f64 = 67.0;

/// Fill roles by band index, bottom first.
const BAND_ROLES: [&str; 3] = ["bottom", "middle", "top"];
const SOLID_ROLES: [&str; 3] = ["primary", "secondary", "accent"];
const LEGEND_CYCLE: [&str; 5] = ["primary", "secondary", "accent", "quaternary", "quinary"];

/// Input of an area chart: one series per band, all sharing the `x` domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaData {
    pub x: Vec<f64>,
    /// Bottom band first.
    pub series: Vec<Vec<f64>>,
    pub labels: Vec<String>,
    pub title: String,
}

impl AreaData {
    #[must_use]
    pub fn new(title: impl Into<String>, x: Vec<f64>, series: Vec<Vec<f64>>) -> Self {
        Self {
            x,
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
}

#[derive(Debug, Clone, Copy)]
pub struct AreaChart {
    pub style: AreaStyle,
    pub width: f64,
    pub height: f64,
}

impl Default for AreaChart {
    fn default() -> Self {
        Self {
            style: AreaStyle::default(),
            width: 1002.0,
            height: 499.0,
        }
    }
}

impl AreaChart {
    #[must_use]
    pub fn new(style: AreaStyle) -> Self {
        Self {
            style,
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

impl Chart for AreaChart {
    type Data = AreaData;

    fn kind(&self) -> ChartKind {
        ChartKind::Area
    }

    fn render(&self, data: &AreaData, tiles: &dyn TileSource) -> Result<Document> {
        let style = resolve_style(self.style.style_id())?;
        let ChartParams::Area { fill } = style.params else {
            return Err(wrong_params(ChartKind::Area, style));
        };
        check_finite("area x values", &data.x)?;
        check_finite("area series", data.series.iter().flatten())?;
        tracing::debug!(
            style = style.id,
            bands = data.series.len(),
            points = data.x.len(),
            "rendering area chart"
        );

        // Band paints depend only on the style, so the legend can be laid out first.
        let band_count = data.series.len();
        let mut builder = start_document(self.width, self.height, style);
        let paints = define_band_paints(fill, band_count, style, &mut builder, tiles)?;
        let legend = legend_entries(fill, &paints, &data.labels, style);
        let head = header(HeaderFlavor::Wide, self.width, style, &data.title, &legend);

        let top = head.chart_start_y;
        let chart_height = match fill {
            AreaFill::Opacity | AreaFill::Solid => FIXED_CHART_HEIGHT,
            AreaFill::Gradient | AreaFill::Pattern | AreaFill::TwoPatterns => {
                self.height - BOTTOM_PADDING - top
            }
        };
        let frame = Rect::new(CHART_X, top, CHART_WIDTH, chart_height - LABEL_GUTTER);
        let bands = stacked_band_paths(&data.series, data.x.len(), frame)?;

        let clip = clip_id(fill);
        builder.define(
            Element::new(Tag::ClipPath).attr("id", clip).child(
                Element::rect()
                    .num("x", frame.x)
                    .num("y", frame.y)
                    .num("width", frame.width)
                    .num("height", frame.height),
            ),
        )?;

        builder.extend(head.elements);
        builder.extend(grid(frame, top + chart_height, style));

        let mut order: Vec<usize> = (0..band_count).collect();
        if matches!(fill, AreaFill::Opacity | AreaFill::Solid) {
            order.reverse();
        }
        for i in order {
            let mut band = Element::path()
                .attr("d", bands.paths[i].to_string())
                .paint("fill", &band_paint(&paints, i, style));
            if fill == AreaFill::Opacity
                && let Some(opacity) = band_opacity(i, band_count)
            {
                band = band.num("opacity", opacity);
            }
            builder.push(
                band.attr("fill-rule", "evenodd")
                    .attr("clip-path", format!("url(#{clip})")),
            );
        }

        Ok(builder.build())
    }
}

const fn clip_id(fill: AreaFill) -> &'static str {
    match fill {
        AreaFill::Opacity | AreaFill::Solid => "chart-clip",
        AreaFill::Gradient => "chart-clip-gradient",
        AreaFill::Pattern => "chart-clip-pattern",
        AreaFill::TwoPatterns => "chart-clip-2patterns",
    }
}

/// Tile behind band `index`, or `None` for a solid band.
const fn pattern_tile(fill: AreaFill, index: usize) -> Option<Tile> {
    match (fill, index) {
        (AreaFill::Pattern, 1) => Some(Tile::CrossingLines),
        (AreaFill::Pattern, 2) => Some(Tile::NoiseRectangleLarge),
        (AreaFill::TwoPatterns, 0) => Some(Tile::VerticalLines),
        (AreaFill::TwoPatterns, 1) => Some(Tile::DiagonalLines),
        (AreaFill::TwoPatterns, 2) => Some(Tile::DitherCrossLarge),
        _ => None,
    }
}

/// Opacity of band `index` out of `count`: the bottom band is opaque, the top band lightest.
fn band_opacity(index: usize, count: usize) -> Option<f64> {
    if index == 0 {
        None
    } else if index + 1 == count {
        Some(0.4)
    } else {
        Some(0.5)
    }
}

/// Paints of the bands in use, registering the gradients and patterns they need.
fn define_band_paints(
    fill: AreaFill,
    band_count: usize,
    style: &StyleRecord,
    builder: &mut DocumentBuilder,
    tiles: &dyn TileSource,
) -> Result<Vec<Paint>> {
    let palette = &style.palette;
    let mut embedder = PatternEmbedder::new(tiles);
    let mut paints = Vec::with_capacity(BAND_ROLES.len());

    for (i, role) in BAND_ROLES.iter().enumerate().take(band_count) {
        let paint = match fill {
            AreaFill::Opacity => Paint::solid(palette.color("area")),
            AreaFill::Solid => Paint::solid(palette.color(SOLID_ROLES[i])),
            AreaFill::Gradient => {
                let id = format!("grad-{role}");
                builder.define(linear_gradient(
                    &id,
                    palette.color(&format!("gradient_{role}_start")),
                    palette.color(&format!("gradient_{role}_end")),
                ))?;
                Paint::gradient(&id)
            }
            AreaFill::Pattern | AreaFill::TwoPatterns => match pattern_tile(fill, i) {
                Some(tile) => {
                    let id = format!("pattern-{role}");
                    builder.define(embedder.pattern(&id, tile)?)?;
                    Paint::pattern(&id)
                }
                None => Paint::solid(palette.color("area")),
            },
        };
        paints.push(paint);
    }
    Ok(paints)
}

fn band_paint(paints: &[Paint], index: usize, style: &StyleRecord) -> Paint {
    paints
        .get(index)
        .cloned()
        .unwrap_or_else(|| Paint::solid(style.palette.color("primary")))
}

/// Vertical gradient from `start` at the bottom to `end` at the top.
fn linear_gradient(id: &str, start: &str, end: &str) -> Element {
    let stop = |offset: &str, color: &str| {
        Element::new(Tag::Stop)
            .attr("offset", offset)
            .attr("style", format!("stop-color:{color};stop-opacity:1"))
    };
    Element::new(Tag::LinearGradient)
        .attr("id", id)
        .attr("x1", "0%")
        .attr("y1", "100%")
        .attr("x2", "0%")
        .attr("y2", "0%")
        .child(stop("0%", start))
        .child(stop("100%", end))
}

fn legend_entries(
    fill: AreaFill,
    paints: &[Paint],
    labels: &[String],
    style: &StyleRecord,
) -> Vec<LegendEntry> {
    let palette = &style.palette;
    let cycle: Vec<&str> = LEGEND_CYCLE
        .into_iter()
        .filter(|role| palette.get(role).is_some())
        .collect();

    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let paint = match fill {
                AreaFill::Opacity | AreaFill::Solid if !cycle.is_empty() => {
                    Paint::solid(palette.color(cycle[i % cycle.len()]))
                }
                _ => band_paint(paints, i, style),
            };
            LegendEntry::new(label.as_str(), paint)
        })
        .collect()
}

/// Dashed vertical grid lines with zero-padded x labels under all but the last.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)] // Grid indices are small
fn grid(frame: Rect, chart_bottom: f64, style: &StyleRecord) -> Vec<Element> {
    let stroke = style.palette.color("grid");
    let text = style.palette.color("legend_text");
    let mut elements = Vec::with_capacity(GRID_LINES * 2);

    for i in 0..GRID_LINES {
        let x = frame.x + i as f64 * GRID_SPACING;
        if x > frame.right() {
            break;
        }
        elements.push(
            grid_line(Point::new(x, frame.y), Point::new(x, frame.bottom()), stroke)
                .attr("stroke-dasharray", "4,4"),
        );
        if i + 1 < GRID_LINES {
            elements.push(anchored_label(
                (x + 10.0, chart_bottom - 10.0),
                text,
                style.font.tick,
                TextAnchor::Middle,
                style,
                zero_pad(i as i64 + 1),
            ));
        }
    }
    elements
}

#[cfg(test)]
#[path = "area_tests.rs"]
mod tests;
